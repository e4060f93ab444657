//! Direct posting to Bluesky.

use atrium_api::app::bsky::feed::post::RecordData as PostRecordData;
use atrium_api::types::string::Datetime;
use bsky_sdk::BskyAgent;
use bsky_sdk::agent::config::Config as BskyConfig;
use bsky_sdk::rich_text::RichText;
use tracing::{debug, info};

use crate::BlueskyError;

pub const DEFAULT_PDS_URL: &str = "https://bsky.social";

/// An authenticated Bluesky session used to publish posts.
pub struct BlueskyPublisher {
    agent: BskyAgent,
    handle: String,
}

impl BlueskyPublisher {
    /// Open a session on `pds_url` with an app password.
    pub async fn login(
        pds_url: &str,
        handle: &str,
        app_password: &str,
    ) -> Result<Self, BlueskyError> {
        let config = BskyConfig {
            endpoint: pds_url.trim_end_matches('/').to_string(),
            ..Default::default()
        };

        let agent = BskyAgent::builder()
            .config(config)
            .build()
            .await
            .map_err(|e| BlueskyError::Auth(format!("cannot reach {pds_url}: {e}")))?;

        agent
            .login(handle, app_password)
            .await
            .map_err(|e| BlueskyError::Auth(format!("{handle}: {e}")))?;

        info!(handle, pds = pds_url, "logged in to bluesky");

        Ok(Self {
            agent,
            handle: handle.to_string(),
        })
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Create a post and return its `at://` URI.
    ///
    /// Links and mentions in `text` become rich-text facets.
    pub async fn post(&self, text: &str) -> Result<String, BlueskyError> {
        let rich_text = RichText::new_with_detect_facets(text)
            .await
            .map_err(|e| BlueskyError::Api(format!("facet detection: {e}")))?;

        let record = PostRecordData {
            created_at: Datetime::now(),
            embed: None,
            entities: None,
            facets: rich_text.facets,
            labels: None,
            langs: None,
            reply: None,
            tags: None,
            text: rich_text.text,
        };

        let created = self
            .agent
            .create_record(record)
            .await
            .map_err(|e| BlueskyError::Api(format!("createRecord: {e}")))?;

        debug!(uri = %created.uri, "created bluesky post");
        Ok(created.uri.to_string())
    }
}
