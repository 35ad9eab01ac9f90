//! Session snapshots as one JSON file per key.

use super::HistoryError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HISTORY_KEY: &str = "chatbot_history";
pub const ANALYTICS_KEY: &str = "test_analytics_data";

#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Missing or unreadable snapshots load as `T::default()`.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "No session snapshot, starting empty");
                return T::default();
            }
            Err(e) => {
                warn!(key, error = %e, "Could not read session snapshot");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Corrupt session snapshot, starting empty");
                T::default()
            }
        }
    }

    /// Writes to a temporary sibling first so a crash never leaves half a file.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), HistoryError> {
        fs::create_dir_all(&self.dir).map_err(|source| HistoryError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path(key);
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(value)?;
        fs::write(&tmp, bytes).map_err(|source| HistoryError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| HistoryError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(key, path = %path.display(), "Session snapshot saved");
        Ok(())
    }
}
