//! Prepare a Bluesky post for the latest Dev.to article.
//!
//! The post text goes to the CI output file as `bluesky_message=...` for a
//! later workflow step. Exactly one `bluesky_message` line is written per
//! run; it is empty whenever there is nothing to post, including when the
//! Dev.to request fails.

use crosspost_bluesky::{
    BlueskyPublisher, CiOutput, MAX_POST_CHARS, compose_message, fit_post, single_line,
};
use crosspost_sources::{Article, ArticleId, DevtoClient};
use reqwest::Client;
use tracing::{error, info};

use crate::config::{DevtoBlueskyConfig, configured};
use crate::{JobError, RunOutcome};

pub const MESSAGE_OUTPUT: &str = "bluesky_message";
pub const ARTICLE_ID_OUTPUT: &str = "new_article_id";

pub async fn run(config: &DevtoBlueskyConfig, http: &Client) -> Result<RunOutcome, JobError> {
    let output = CiOutput::from_path(config.github_output.clone());

    let Some(user) = configured(&config.devto_user) else {
        error!("DEVTO_USER not set");
        output.set(MESSAGE_OUTPUT, "").await?;
        return Ok(RunOutcome::NotConfigured);
    };

    let devto = DevtoClient::new(http.clone(), config.devto_api_url.as_str());
    let article = match devto.latest_article(user).await {
        Ok(Some(article)) => article,
        Ok(None) => {
            info!(user, "no latest article found on dev.to");
            output.set(MESSAGE_OUTPUT, "").await?;
            return Ok(RunOutcome::NothingNew);
        }
        Err(e) => {
            error!(error = %e, "failed to fetch articles from dev.to");
            output.set(MESSAGE_OUTPUT, "").await?;
            return Ok(RunOutcome::SourceFailed);
        }
    };

    if already_posted(config, &article) {
        info!("no new articles to post to bluesky");
        output.set(MESSAGE_OUTPUT, "").await?;
        return Ok(RunOutcome::NothingNew);
    }

    let message = compose_message(article.title(), article.description(), article.url());
    info!(message = %message, "prepared bluesky message");

    output.set(MESSAGE_OUTPUT, &single_line(&message)).await?;
    if let Some(id) = article.dedup_id() {
        output.set(ARTICLE_ID_OUTPUT, &id.to_string()).await?;
    }

    let failed = if config.publish && !publish(config, &article).await {
        1
    } else {
        0
    };

    Ok(RunOutcome::Delivered { sent: 1, failed })
}

fn already_posted(config: &DevtoBlueskyConfig, article: &Article) -> bool {
    match (configured(&config.last_article_id), article.dedup_id()) {
        (Some(last), Some(id)) => *id == ArticleId::from(last),
        _ => false,
    }
}

/// Post directly to Bluesky. Failures are logged and reported as `false`.
async fn publish(config: &DevtoBlueskyConfig, article: &Article) -> bool {
    let Some((handle, app_password)) = config.bluesky_credentials() else {
        error!("--publish needs BLUESKY_HANDLE and BLUESKY_APP_PASSWORD");
        return false;
    };

    let publisher =
        match BlueskyPublisher::login(&config.bluesky_pds_url, handle, app_password).await {
            Ok(publisher) => publisher,
            Err(e) => {
                error!(error = %e, "failed to log in to bluesky");
                return false;
            }
        };

    let text = fit_post(
        article.title(),
        article.description(),
        article.url(),
        MAX_POST_CHARS,
    );

    match publisher.post(&text).await {
        Ok(uri) => {
            info!(uri = %uri, handle = %publisher.handle(), "published to bluesky");
            true
        }
        Err(e) => {
            error!(error = %e, "failed to publish to bluesky");
            false
        }
    }
}
