//! Dev.to public API client.

use reqwest::Client;
use tracing::debug;

use crate::{Article, SourceError};

/// Base URL of the public Dev.to API.
pub const DEFAULT_DEVTO_API_URL: &str = "https://dev.to/api";

/// Client for the unauthenticated Dev.to articles endpoint.
#[derive(Debug, Clone)]
pub struct DevtoClient {
    http: Client,
    api_url: String,
}

impl DevtoClient {
    /// Create a client against `api_url` (usually [`DEFAULT_DEVTO_API_URL`]).
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the most recently published article of `username`.
    ///
    /// Returns `Ok(None)` when the user has no published articles.
    pub async fn latest_article(&self, username: &str) -> Result<Option<Article>, SourceError> {
        let url = format!("{}/articles", self.api_url);

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", "1"), ("username", username)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::from_response(response).await);
        }

        let body = response.bytes().await?;
        let articles: Vec<Article> = serde_json::from_slice(&body)?;
        debug!(username, count = articles.len(), "fetched dev.to articles");

        Ok(articles.into_iter().next())
    }
}
