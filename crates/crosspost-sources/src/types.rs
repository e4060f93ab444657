//! Items produced by the content sources.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markup::strip_markup;

/// Title used when an article or entry carries none.
pub const UNTITLED_ARTICLE: &str = "Untitled Article";

/// Title used when a feed entry carries none.
pub const UNTITLED_ENTRY: &str = "Untitled Entry";

/// Description used when an article or entry carries none.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Identifier of a Dev.to article.
///
/// Dev.to returns numeric ids, but markers written by other tooling may hold
/// the id as a string, so both shapes are accepted and compared by value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(u64),
    Text(String),
}

impl ArticleId {
    /// Whether this id can be used for deduplication.
    ///
    /// Zero and empty ids are treated as missing.
    pub fn is_usable(&self) -> bool {
        match self {
            ArticleId::Number(n) => *n != 0,
            ArticleId::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl PartialEq for ArticleId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ArticleId::Number(a), ArticleId::Number(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for ArticleId {}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => f.write_str(s.trim()),
        }
    }
}

impl From<u64> for ArticleId {
    fn from(n: u64) -> Self {
        ArticleId::Number(n)
    }
}

impl From<&str> for ArticleId {
    fn from(s: &str) -> Self {
        match s.trim().parse::<u64>() {
            Ok(n) => ArticleId::Number(n),
            Err(_) => ArticleId::Text(s.trim().to_string()),
        }
    }
}

/// A Dev.to article as returned by `GET /articles`.
///
/// Only the fields the notifiers use are kept. Every field is optional on
/// the wire; accessors apply the display defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<ArticleId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl Article {
    /// The id, if it is usable for deduplication.
    pub fn dedup_id(&self) -> Option<&ArticleId> {
        self.id.as_ref().filter(|id| id.is_usable())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_ARTICLE)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Cover image URL, ignoring empty strings.
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref().filter(|s| !s.is_empty())
    }
}

/// One entry of an RSS, Atom or JSON feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Identity used for deduplication: the entry's alternate link, falling
    /// back to the entry id.
    pub identifier: String,
    pub title: String,
    pub link: Option<String>,
    /// Raw summary, possibly containing markup.
    pub summary: Option<String>,
}

impl FeedEntry {
    /// Summary with all markup removed, or the placeholder when there is none.
    pub fn plain_description(&self) -> String {
        match &self.summary {
            Some(summary) => strip_markup(summary),
            None => NO_DESCRIPTION.to_string(),
        }
    }
}

impl From<feed_rs::model::Entry> for FeedEntry {
    fn from(entry: feed_rs::model::Entry) -> Self {
        let link = alternate_link(&entry.links);

        let summary = entry
            .summary
            .map(|t| t.content)
            .or_else(|| entry.content.and_then(|c| c.body));

        Self {
            identifier: link.clone().unwrap_or(entry.id),
            title: entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| UNTITLED_ENTRY.to_string()),
            link,
            summary,
        }
    }
}

/// The page an entry points at.
///
/// Atom entries may list `replies`, `edit` or `self` links before the
/// alternate one. A link without `rel` counts as alternate.
fn alternate_link(links: &[feed_rs::model::Link]) -> Option<String> {
    let usable = || links.iter().filter(|l| !l.href.is_empty());

    usable()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| usable().next())
        .map(|l| l.href.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn article_defaults_apply_to_missing_fields() {
        let article: Article = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(article.title(), UNTITLED_ARTICLE);
        assert_eq!(article.description(), NO_DESCRIPTION);
        assert_eq!(article.url(), None);
        assert_eq!(article.cover_image(), None);
    }

    #[test]
    fn article_null_fields_are_missing() {
        let article: Article = serde_json::from_str(
            r#"{"id": null, "title": "T", "description": null, "cover_image": null}"#,
        )
        .unwrap();
        assert_eq!(article.dedup_id(), None);
        assert_eq!(article.title(), "T");
        assert_eq!(article.description(), NO_DESCRIPTION);
    }

    #[test]
    fn zero_id_is_not_usable() {
        let article: Article = serde_json::from_str(r#"{"id": 0}"#).unwrap();
        assert_eq!(article.dedup_id(), None);
    }

    #[test]
    fn empty_cover_image_is_ignored() {
        let article: Article = serde_json::from_str(r#"{"id": 1, "cover_image": ""}"#).unwrap();
        assert_eq!(article.cover_image(), None);
    }

    #[test]
    fn article_id_compares_across_shapes() {
        assert_eq!(ArticleId::Number(42), ArticleId::Text("42".to_string()));
        assert_eq!(ArticleId::from("42"), ArticleId::Number(42));
        assert_ne!(ArticleId::Number(41), ArticleId::Number(42));
        assert_eq!(ArticleId::from(" abc "), ArticleId::Text("abc".to_string()));
    }

    #[test]
    fn article_id_keeps_wire_shape() {
        let id: ArticleId = serde_json::from_str("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let id: ArticleId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""42""#);
    }

    #[test]
    fn entry_without_summary_uses_placeholder() {
        let entry = FeedEntry {
            identifier: "https://example.com/a".to_string(),
            title: "A".to_string(),
            link: Some("https://example.com/a".to_string()),
            summary: None,
        };
        assert_eq!(entry.plain_description(), NO_DESCRIPTION);
    }

    #[test]
    fn entry_summary_is_stripped() {
        let entry = FeedEntry {
            identifier: "a".to_string(),
            title: "A".to_string(),
            link: None,
            summary: Some("<p>Hello <b>world</b></p>".to_string()),
        };
        assert_eq!(entry.plain_description(), "Hello world");
    }
}
