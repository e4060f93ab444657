//! Whole-file JSON load and atomic save.

use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::StateError;

/// Load `path`, or `T::default()` when the file does not exist.
pub(crate) async fn load<T>(path: &Path) -> Result<T, StateError>
where
    T: DeserializeOwned + Default,
{
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no marker file, starting empty");
            return Ok(T::default());
        }
        Err(source) => {
            return Err(StateError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| StateError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with the JSON encoding of `value`.
///
/// Writes a sibling temp file first and renames it over the target.
pub(crate) async fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), StateError> {
    let io_err = |source| StateError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(value).map_err(|source| StateError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let mut file = fs::File::create(&temp_path).await.map_err(io_err)?;
    file.write_all(content.as_bytes()).await.map_err(io_err)?;
    file.write_all(b"\n").await.map_err(io_err)?;
    file.sync_all().await.map_err(io_err)?;
    drop(file);

    fs::rename(&temp_path, path).await.map_err(io_err)?;
    debug!(path = %path.display(), "saved marker file");

    Ok(())
}
