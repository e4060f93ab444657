//! The batch jobs, one module per subcommand.

pub mod devto_bluesky;
pub mod devto_discord;
pub mod rss_discord;
