use thiserror::Error;

/// Errors from the story service boundary.
///
/// The UI flattens all of these into a single display string; the variants
/// exist so the client code can stay explicit about which step failed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("story service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("story service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("could not parse story response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not save downloaded file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
