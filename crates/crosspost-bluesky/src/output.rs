//! CI step outputs (`GITHUB_OUTPUT`).

use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::message::single_line;

/// Where `key=value` outputs go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CiOutput {
    /// Append to the file a CI runner reads step outputs from.
    File(PathBuf),
    /// Print to stdout when not running under CI.
    Stdout,
}

impl CiOutput {
    /// Use `path` when set and non-empty, stdout otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path.filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => CiOutput::File(path),
            None => {
                warn!("GITHUB_OUTPUT not set, writing outputs to stdout");
                CiOutput::Stdout
            }
        }
    }

    /// Append one `key=value` line. Line breaks in `value` become spaces.
    pub async fn set(&self, key: &str, value: &str) -> std::io::Result<()> {
        let line = format!("{}={}\n", key, single_line(value));

        match self {
            CiOutput::File(path) => {
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                file.write_all(line.as_bytes()).await?;
                file.flush().await
            }
            CiOutput::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(line.as_bytes()).await?;
                stdout.flush().await
            }
        }
    }
}
