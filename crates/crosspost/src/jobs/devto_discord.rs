//! Announce the latest Dev.to article on Discord.
//!
//! Only the single latest article is considered. If several are published
//! between two runs, only the newest is announced.

use crosspost_discord::{DiscordWebhook, Embed};
use crosspost_sources::DevtoClient;
use crosspost_state::DevtoState;
use reqwest::Client;
use tracing::{error, info};

use crate::config::{DevtoDiscordConfig, configured};
use crate::{JobError, RunOutcome};

pub async fn run(config: &DevtoDiscordConfig, http: &Client) -> Result<RunOutcome, JobError> {
    let Some(webhook_url) = configured(&config.webhook_url) else {
        error!("DISCORD_WEBHOOK_URL not set");
        return Ok(RunOutcome::NotConfigured);
    };

    let Some(user) = configured(&config.devto_user) else {
        error!("DEVTO_USER not set");
        return Ok(RunOutcome::NotConfigured);
    };

    let devto = DevtoClient::new(http.clone(), config.devto_api_url.as_str());
    let article = match devto.latest_article(user).await {
        Ok(Some(article)) => article,
        Ok(None) => {
            info!(user, "no articles found on dev.to");
            return Ok(RunOutcome::NothingNew);
        }
        Err(e) => {
            error!(error = %e, "failed to fetch articles from dev.to");
            return Ok(RunOutcome::SourceFailed);
        }
    };

    let mut state = DevtoState::load(&config.state_file).await?;

    let Some(id) = article.dedup_id().filter(|id| state.is_new(id)).cloned() else {
        info!("no new articles to notify about");
        return Ok(RunOutcome::NothingNew);
    };

    info!(id = %id, title = %article.title(), "new article found");

    let embed = Embed::new(article.title(), article.description())
        .with_url(article.url())
        .with_image(article.cover_image());

    match DiscordWebhook::new(http.clone(), webhook_url).send(embed).await {
        Ok(()) => {
            state.record(id).await?;
            Ok(RunOutcome::Delivered { sent: 1, failed: 0 })
        }
        Err(e) => {
            error!(error = %e, title = %article.title(), "failed to send discord message");
            Ok(RunOutcome::Delivered { sent: 0, failed: 1 })
        }
    }
}
