//! Webhook client.

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::{DiscordError, Embed, WebhookMessage};

/// A Discord webhook endpoint.
#[derive(Clone)]
pub struct DiscordWebhook {
    http: Client,
    url: String,
}

// The URL embeds the webhook token, keep it out of logs.
impl std::fmt::Debug for DiscordWebhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordWebhook").finish_non_exhaustive()
    }
}

impl DiscordWebhook {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Post a single embed.
    ///
    /// One attempt only; a failure is returned to the caller, which decides
    /// whether the item should be retried on the next run.
    pub async fn send(&self, embed: Embed) -> Result<(), DiscordError> {
        let title = embed.title.clone();
        let message = WebhookMessage::from(embed);

        let response = self.http.post(&self.url).json(&message).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<f64>().ok());
            return Err(DiscordError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(DiscordError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "webhook accepted message");
        info!(title = %title, "sent discord message");
        Ok(())
    }
}
