//! Marker for the RSS notifier.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{StateError, file};

pub const DEFAULT_RSS_STATE_FILE: &str = "last_checked_rss.json";

/// On-disk shape of `last_checked_rss.json`: feed URL to the identifiers
/// already announced from it, in announcement order.
///
/// Lists only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenEntries(BTreeMap<String, Vec<String>>);

impl SeenEntries {
    pub fn contains(&self, feed_url: &str, identifier: &str) -> bool {
        self.0
            .get(feed_url)
            .is_some_and(|seen| seen.iter().any(|s| s == identifier))
    }

    /// Append `identifier` to the feed's list unless it is already there.
    pub fn insert(&mut self, feed_url: &str, identifier: &str) {
        let seen = self.0.entry(feed_url.to_string()).or_default();
        if !seen.iter().any(|s| s == identifier) {
            seen.push(identifier.to_string());
        }
    }

    pub fn count(&self, feed_url: &str) -> usize {
        self.0.get(feed_url).map_or(0, Vec::len)
    }

    pub fn get(&self, feed_url: &str) -> &[String] {
        self.0.get(feed_url).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Seen feed entries, bound to their file.
///
/// Changes stay in memory until [`RssState::save`].
#[derive(Debug)]
pub struct RssState {
    path: PathBuf,
    seen: SeenEntries,
}

impl RssState {
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StateError> {
        let path = path.into();
        let seen = file::load(&path).await?;
        Ok(Self { path, seen })
    }

    pub fn seen(&self) -> &SeenEntries {
        &self.seen
    }

    pub fn is_seen(&self, feed_url: &str, identifier: &str) -> bool {
        self.seen.contains(feed_url, identifier)
    }

    pub fn mark_seen(&mut self, feed_url: &str, identifier: &str) {
        self.seen.insert(feed_url, identifier);
    }

    pub async fn save(&self) -> Result<(), StateError> {
        file::save(&self.path, &self.seen).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use tempfile::tempdir;

    const FEED: &str = "https://blog.example.com/feed.xml";

    #[tokio::test]
    async fn missing_file_has_nothing_seen() {
        let dir = tempdir().unwrap();
        let state = RssState::load(dir.path().join(DEFAULT_RSS_STATE_FILE))
            .await
            .unwrap();

        assert!(!state.is_seen(FEED, "https://blog.example.com/a"));
        assert_eq!(state.seen().count(FEED), 0);
    }

    #[tokio::test]
    async fn marks_are_in_memory_until_saved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_RSS_STATE_FILE);

        let mut state = RssState::load(&path).await.unwrap();
        state.mark_seen(FEED, "c");
        state.mark_seen(FEED, "b");
        assert!(!path.exists());

        state.save().await.unwrap();

        let reloaded = RssState::load(&path).await.unwrap();
        assert_eq!(reloaded.seen().get(FEED), ["c".to_string(), "b".to_string()]);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw[FEED], serde_json::json!(["c", "b"]));
        assert_eq!(raw.as_object().map(|o| o.len()), Some(1));
    }

    #[tokio::test]
    async fn feeds_are_tracked_separately() {
        let dir = tempdir().unwrap();
        let mut state = RssState::load(dir.path().join(DEFAULT_RSS_STATE_FILE))
            .await
            .unwrap();

        state.mark_seen(FEED, "a");
        assert!(state.is_seen(FEED, "a"));
        assert!(!state.is_seen("https://other.example.com/rss", "a"));
    }

    #[tokio::test]
    async fn legacy_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_RSS_STATE_FILE);
        std::fs::write(&path, format!(r#"{{"{FEED}": ["x", "y"]}}"#)).unwrap();

        let state = RssState::load(&path).await.unwrap();
        assert!(state.is_seen(FEED, "x"));
        assert!(state.is_seen(FEED, "y"));
        assert_eq!(state.seen().count(FEED), 2);
    }

    proptest! {
        #[test]
        fn insert_grows_by_distinct_identifiers(ids in prop::collection::vec("[a-z]{1,4}", 0..40)) {
            let mut seen = SeenEntries::default();
            for id in &ids {
                seen.insert(FEED, id);
            }

            let distinct: std::collections::BTreeSet<_> = ids.iter().collect();
            prop_assert_eq!(seen.count(FEED), distinct.len());
            for id in &ids {
                prop_assert!(seen.contains(FEED, id));
            }
        }
    }
}
