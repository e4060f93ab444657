//! crosspost binary.
//!
//! Subcommands:
//! - `devto-bluesky`: write the Bluesky post for the latest Dev.to article to CI outputs
//! - `devto-discord`: announce the latest Dev.to article on Discord
//! - `rss-discord`: announce unseen feed entries on Discord

use std::time::Duration;

use clap::{Parser, Subcommand};
use crosspost::config::{DevtoBlueskyConfig, DevtoDiscordConfig, RssDiscordConfig};
use crosspost::{build_http_client, jobs};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "crosspost")]
#[command(about = "Forward new Dev.to articles and feed entries to Discord and Bluesky", long_about = None)]
struct Cli {
    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "CROSSPOST_HTTP_TIMEOUT_SECS", default_value = "30", global = true)]
    http_timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prepare a Bluesky post for the latest Dev.to article
    DevtoBluesky(DevtoBlueskyConfig),

    /// Announce the latest Dev.to article on Discord
    DevtoDiscord(DevtoDiscordConfig),

    /// Announce new RSS/Atom feed entries on Discord
    RssDiscord(RssDiscordConfig),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout may carry CI outputs.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "crosspost=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let http = build_http_client(Duration::from_secs(cli.http_timeout_secs))
        .map_err(|e| miette::miette!("failed to build HTTP client: {}", e))?;

    let (job, outcome) = match cli.command {
        Commands::DevtoBluesky(config) => {
            ("devto-bluesky", jobs::devto_bluesky::run(&config, &http).await)
        }
        Commands::DevtoDiscord(config) => {
            ("devto-discord", jobs::devto_discord::run(&config, &http).await)
        }
        Commands::RssDiscord(config) => {
            ("rss-discord", jobs::rss_discord::run(&config, &http).await)
        }
    };

    let outcome = outcome.map_err(|e| miette::miette!("{} failed: {}", job, e))?;
    outcome.log(job);

    Ok(())
}
