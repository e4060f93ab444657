//! Announce unseen feed entries on Discord, oldest first.

use crosspost_discord::{DiscordWebhook, Embed};
use crosspost_sources::{FeedClient, FeedEntry};
use crosspost_state::RssState;
use reqwest::Client;
use tracing::{error, info};

use crate::config::{RssDiscordConfig, configured};
use crate::{JobError, RunOutcome};

/// Send every entry not yet recorded for the feed.
///
/// A failed send does not stop the loop. Successful sends are recorded in
/// memory and the marker is written once after the loop, so a failed entry
/// is retried next run while earlier successes are not.
pub async fn run(config: &RssDiscordConfig, http: &Client) -> Result<RunOutcome, JobError> {
    let (Some(webhook_url), Some(feed_url)) =
        (configured(&config.webhook_url), configured(&config.feed_url))
    else {
        error!("DISCORD_WEBHOOK_URL or RSS_FEED_URL not set");
        return Ok(RunOutcome::NotConfigured);
    };

    let entries = match FeedClient::new(http.clone()).entries(feed_url).await {
        Ok(entries) => entries,
        Err(e) => {
            error!(feed_url, error = %e, "failed to read feed");
            return Ok(RunOutcome::SourceFailed);
        }
    };

    let mut state = RssState::load(&config.state_file).await?;

    let new_entries: Vec<FeedEntry> = entries
        .into_iter()
        .filter(|entry| !state.is_seen(feed_url, &entry.identifier))
        .collect();

    let webhook = DiscordWebhook::new(http.clone(), webhook_url);
    let mut sent = 0;
    let mut failed = 0;

    // Feeds list newest first.
    for entry in new_entries.iter().rev() {
        let embed =
            Embed::new(&entry.title, &entry.plain_description()).with_url(entry.link.as_deref());

        match webhook.send(embed).await {
            Ok(()) => {
                state.mark_seen(feed_url, &entry.identifier);
                sent += 1;
            }
            Err(e) => {
                error!(error = %e, title = %entry.title, "failed to send discord message");
                failed += 1;
            }
        }
    }

    state.save().await?;
    info!(
        count = new_entries.len(),
        tracked = state.seen().count(feed_url),
        "processed new entries"
    );

    if new_entries.is_empty() {
        Ok(RunOutcome::NothingNew)
    } else {
        Ok(RunOutcome::Delivered { sent, failed })
    }
}
