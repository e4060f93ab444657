//! Marker for the Dev.to notifier.

use std::path::PathBuf;

use crosspost_sources::ArticleId;
use serde::{Deserialize, Serialize};

use crate::{StateError, file};

pub const DEFAULT_DEVTO_STATE_FILE: &str = "last_checked_devto.json";

/// On-disk shape of `last_checked_devto.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevtoMarker {
    pub last_article_id: Option<ArticleId>,
}

/// The last announced Dev.to article, bound to its file.
#[derive(Debug)]
pub struct DevtoState {
    path: PathBuf,
    marker: DevtoMarker,
}

impl DevtoState {
    /// Load the marker at `path`; a missing file means nothing was announced yet.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StateError> {
        let path = path.into();
        let marker = file::load(&path).await?;
        Ok(Self { path, marker })
    }

    pub fn last_article_id(&self) -> Option<&ArticleId> {
        self.marker.last_article_id.as_ref()
    }

    /// Whether `id` differs from the last announced article.
    pub fn is_new(&self, id: &ArticleId) -> bool {
        self.last_article_id() != Some(id)
    }

    /// Record `id` as announced and persist immediately.
    pub async fn record(&mut self, id: ArticleId) -> Result<(), StateError> {
        self.marker.last_article_id = Some(id);
        file::save(&self.path, &self.marker).await
    }
}
