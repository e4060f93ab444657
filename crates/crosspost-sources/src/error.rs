//! Error types for content sources.

use thiserror::Error;

/// Errors that can occur while fetching from a content source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The feed document could not be parsed.
    #[error("feed parse error: {0}")]
    FeedParse(String),
}

impl SourceError {
    /// Build a status error from a failed response, keeping its body for diagnostics.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        SourceError::Status { status, body }
    }
}
