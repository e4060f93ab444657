//! Bluesky side of crosspost.
//!
//! The Dev.to → Bluesky job normally only prepares the post text and hands it
//! to a CI step through the `GITHUB_OUTPUT` file. [`BlueskyPublisher`] can
//! post it directly instead.

mod error;
mod message;
mod output;
mod publisher;

pub use error::BlueskyError;
pub use message::{MAX_POST_CHARS, compose_message, fit_post, single_line};
pub use output::CiOutput;
pub use publisher::{BlueskyPublisher, DEFAULT_PDS_URL};
