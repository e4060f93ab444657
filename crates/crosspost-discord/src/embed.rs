//! Webhook payload types.

use serde::Serialize;

/// Embed accent color (a light blue).
pub const EMBED_COLOR: u32 = 5_814_783;

/// Discord rejects embeds whose title is longer than this.
pub const MAX_TITLE_CHARS: usize = 256;

/// Discord rejects embeds whose description is longer than this.
pub const MAX_DESCRIPTION_CHARS: usize = 4096;

/// Body of a webhook execution request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

impl From<Embed> for WebhookMessage {
    fn from(embed: Embed) -> Self {
        Self {
            embeds: vec![embed],
        }
    }
}

/// A rich embed announcing one article or feed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

impl Embed {
    /// Build an embed, clipping title and description to Discord's limits.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: clip_chars(title, MAX_TITLE_CHARS),
            url: None,
            description: clip_chars(description, MAX_DESCRIPTION_CHARS),
            color: EMBED_COLOR,
            image: None,
        }
    }

    pub fn with_url(mut self, url: Option<&str>) -> Self {
        self.url = url.filter(|u| !u.is_empty()).map(str::to_string);
        self
    }

    pub fn with_image(mut self, image_url: Option<&str>) -> Self {
        self.image = image_url
            .filter(|u| !u.is_empty())
            .map(|u| EmbedImage { url: u.to_string() });
        self
    }
}

/// Clip a string to at most `max_chars` characters (not bytes), ending in an
/// ellipsis when anything was cut.
fn clip_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut clipped: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}
