/// The three-way result of a generation request
///
/// Exactly one variant is live at any time. The update loop resets to
/// `Idle` at the start of each submit, so the view never shows a stale
/// result next to the loading indicator.

use super::story::StoryMetadata;

/// Settled (or not-yet-settled) outcome of the last generation request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationOutcome {
    /// No request has completed since the last submit (or ever)
    #[default]
    Idle,
    /// The service returned story metadata
    Success(StoryMetadata),
    /// The request failed; a single display string covers transport,
    /// HTTP status and parse failures alike
    Failure(String),
}

impl GenerationOutcome {
    /// Video path to download, if one is available
    ///
    /// Returns `None` unless the outcome is a success carrying a
    /// non-empty `video_file` — the download trigger makes no network
    /// call without it.
    pub fn video_file(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Success(metadata) if !metadata.video_file.is_empty() => {
                Some(&metadata.video_file)
            }
            _ => None,
        }
    }
}
