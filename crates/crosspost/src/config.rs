//! Per-job configuration.
//!
//! Every field is a CLI flag with an environment fallback, so a CI workflow
//! can configure a job purely through `env:`. Values are passed into the jobs
//! explicitly; nothing reads the environment after parsing.

use std::path::PathBuf;

use clap::Args;
use crosspost_bluesky::DEFAULT_PDS_URL;
use crosspost_sources::DEFAULT_DEVTO_API_URL;
use crosspost_state::{DEFAULT_DEVTO_STATE_FILE, DEFAULT_RSS_STATE_FILE};

/// Settings for `crosspost devto-bluesky`.
#[derive(Clone, Args)]
pub struct DevtoBlueskyConfig {
    /// Dev.to username whose latest article is posted
    #[arg(long, env = "DEVTO_USER")]
    pub devto_user: Option<String>,

    /// Dev.to API base URL
    #[arg(long, env = "DEVTO_API_URL", default_value = DEFAULT_DEVTO_API_URL)]
    pub devto_api_url: String,

    /// Id of the article posted by the previous run; an equal id produces no message
    #[arg(long, env = "LAST_ARTICLE_ID")]
    pub last_article_id: Option<String>,

    /// File receiving `key=value` step outputs (stdout when unset)
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Also publish the post to Bluesky directly
    #[arg(long)]
    pub publish: bool,

    /// Bluesky PDS URL
    #[arg(long, env = "BLUESKY_PDS_URL", default_value = DEFAULT_PDS_URL)]
    pub bluesky_pds_url: String,

    /// Bluesky handle used with --publish
    #[arg(long, env = "BLUESKY_HANDLE")]
    pub bluesky_handle: Option<String>,

    /// Bluesky app password used with --publish
    #[arg(long, env = "BLUESKY_APP_PASSWORD", hide_env_values = true)]
    pub bluesky_app_password: Option<String>,
}

impl DevtoBlueskyConfig {
    /// Handle and app password, when both are set.
    pub fn bluesky_credentials(&self) -> Option<(&str, &str)> {
        Some((
            configured(&self.bluesky_handle)?,
            configured(&self.bluesky_app_password)?,
        ))
    }
}

/// Settings for `crosspost devto-discord`.
#[derive(Clone, Args)]
pub struct DevtoDiscordConfig {
    /// Dev.to username whose latest article is announced
    #[arg(long, env = "DEVTO_USER")]
    pub devto_user: Option<String>,

    /// Dev.to API base URL
    #[arg(long, env = "DEVTO_API_URL", default_value = DEFAULT_DEVTO_API_URL)]
    pub devto_api_url: String,

    /// Discord webhook receiving the announcement
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Marker file holding the last announced article id
    #[arg(long, env = "DEVTO_STATE_FILE", default_value = DEFAULT_DEVTO_STATE_FILE)]
    pub state_file: PathBuf,
}

/// Settings for `crosspost rss-discord`.
#[derive(Clone, Args)]
pub struct RssDiscordConfig {
    /// RSS, Atom or JSON feed to watch
    #[arg(long, env = "RSS_FEED_URL")]
    pub feed_url: Option<String>,

    /// Discord webhook receiving the announcements
    #[arg(long, env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// Marker file holding the identifiers already announced per feed
    #[arg(long, env = "RSS_STATE_FILE", default_value = DEFAULT_RSS_STATE_FILE)]
    pub state_file: PathBuf,
}

/// A set, non-blank value. CI runners export unset secrets as empty strings.
pub(crate) fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
