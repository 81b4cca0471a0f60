use crate::error::{ApiError, Result};
use crate::state::story::StoryMetadata;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Base URL of the story service, fixed at build time
const SERVER_URL: &str = "http://localhost:8000";

/// HTTP client for the GenAI Story service
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
}

/// Body of `POST /generate_story/`, built fresh for each submit
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub genre: String,
    pub num_scenes: u32,
}

/// Envelope the service wraps story metadata in
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    metadata: StoryMetadata,
}

impl ApiClient {
    pub fn new() -> Self {
        // No client-side timeout; generation can legitimately take minutes
        Self {
            http: Client::new(),
        }
    }

    /// Request one generated story
    ///
    /// Exactly one POST per call, no retries. Every failure mode maps to
    /// an `ApiError`: transport errors, non-2xx statuses, and bodies that
    /// do not parse as the expected JSON.
    pub async fn generate_story(&self, request: GenerationRequest) -> Result<StoryMetadata> {
        info!(
            "Requesting story: genre={:?}, num_scenes={}",
            request.genre, request.num_scenes
        );

        let response = self
            .http
            .post(format!("{SERVER_URL}/generate_story/"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Story service returned HTTP {}", status);
            return Err(ApiError::Status(status));
        }

        // Read the body first so a malformed payload surfaces as a parse
        // error rather than a transport error.
        let body = response.text().await?;
        let parsed: GenerateResponse = serde_json::from_str(&body)?;

        info!(
            "Story received: {:?} ({} scenes)",
            parsed.metadata.title,
            parsed.metadata.scenes.len()
        );
        Ok(parsed.metadata)
    }

    /// Fetch a generated video and write it to `destination`
    ///
    /// `path` is the server-relative path from the story metadata; reqwest
    /// percent-encodes it as the `path` query parameter.
    pub async fn download_video(&self, path: String, destination: PathBuf) -> Result<PathBuf> {
        info!("Downloading video {:?} to {}", path, destination.display());

        let response = self
            .http
            .get(format!("{SERVER_URL}/download_file/"))
            .query(&[("path", path.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Download endpoint returned HTTP {}", status);
            return Err(ApiError::Status(status));
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(&destination, &bytes).await?;

        info!("Video saved to {}", destination.display());
        Ok(destination)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
