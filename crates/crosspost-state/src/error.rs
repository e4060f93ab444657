//! Error types for marker persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing a marker file.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed marker file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
