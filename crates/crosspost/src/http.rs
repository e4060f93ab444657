//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = concat!("crosspost/", env!("CARGO_PKG_VERSION"));

/// Build the client used for every request of a run.
///
/// Dev.to rejects requests without a user agent.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(10))
        .timeout(timeout)
        .build()
}
