//! Error types for webhook delivery.

use thiserror::Error;

/// Errors that can occur when posting to a Discord webhook.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Discord rejected the message.
    #[error("webhook returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Rate limited.
    #[error("rate limited{}", retry_after_secs.map(|s| format!(" (retry after {}s)", s)).unwrap_or_default())]
    RateLimited {
        /// Seconds to wait before retrying (from Retry-After header, optional).
        retry_after_secs: Option<f64>,
    },
}
