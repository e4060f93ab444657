//! Discord webhook delivery.
//!
//! Messages are sent as a single rich embed per request. Webhooks need no
//! authentication beyond the secret URL itself.

mod embed;
mod error;
mod webhook;

pub use embed::{
    EMBED_COLOR, Embed, EmbedImage, MAX_DESCRIPTION_CHARS, MAX_TITLE_CHARS, WebhookMessage,
};
pub use error::DiscordError;
pub use webhook::DiscordWebhook;
