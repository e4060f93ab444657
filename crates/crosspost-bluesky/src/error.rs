//! Error types for Bluesky publishing.

use thiserror::Error;

/// Failures while publishing directly to Bluesky.
#[derive(Debug, Error)]
pub enum BlueskyError {
    /// The PDS could not be reached or refused the credentials.
    #[error("bluesky login failed: {0}")]
    Auth(String),

    #[error("bluesky request failed: {0}")]
    Api(String),
}
