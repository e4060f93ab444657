//! Content sources for crosspost.
//!
//! This crate fetches the items that the notifier jobs forward:
//!
//! - **Dev.to**: the latest published article for a user
//! - **Feeds**: every entry of an RSS, Atom or JSON feed
//!
//! Neither client keeps state between calls. Deduplication lives in
//! `crosspost-state`.

mod devto;
mod error;
mod feed;
mod markup;
mod types;

pub use devto::{DEFAULT_DEVTO_API_URL, DevtoClient};
pub use error::SourceError;
pub use feed::FeedClient;
pub use markup::strip_markup;
pub use types::*;
