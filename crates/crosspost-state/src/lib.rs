//! Persisted "last checked" markers.
//!
//! Each notifier keeps one small JSON file next to where it runs:
//!
//! - `last_checked_devto.json`: `{"last_article_id": 42}`
//! - `last_checked_rss.json`: `{"<feed url>": ["<entry id>", ...]}`
//!
//! Files are read once at startup and rewritten whole. There is no locking;
//! two concurrent runs of the same job race on the file.

mod devto;
mod error;
mod file;
mod rss;

pub use devto::{DEFAULT_DEVTO_STATE_FILE, DevtoMarker, DevtoState};
pub use error::StateError;
pub use rss::{DEFAULT_RSS_STATE_FILE, RssState, SeenEntries};
