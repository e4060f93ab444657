//! crosspost: announce new Dev.to articles and feed entries.
//!
//! Three independent batch jobs, each meant to run once per external trigger
//! (a CI schedule, cron):
//!
//! - [`jobs::devto_bluesky`]: prepare a Bluesky post for the latest article
//! - [`jobs::devto_discord`]: announce the latest article on Discord
//! - [`jobs::rss_discord`]: announce every unseen feed entry on Discord
//!
//! Jobs run sequentially on one task and never retry within a run. A failed
//! delivery is left unrecorded so the next run picks it up again.

pub mod config;
mod error;
mod http;
pub mod jobs;
mod outcome;

pub use error::JobError;
pub use http::build_http_client;
pub use outcome::RunOutcome;
