//! File-backed persistence for the cached display name.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::SessionError;

/// On-disk shape of the session cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    user_name: String,
    saved_at: DateTime<Utc>,
}

/// Persists the logged-in user's display name as a small JSON file.
///
/// This is the only state that survives a restart; the session cookie itself
/// lives in the HTTP client and dies with the process.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached display name, if any.
    ///
    /// A missing file means no cached name; a corrupt file is discarded with
    /// a warning.
    pub fn load(&self) -> Option<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return None,
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => Some(stored.user_name),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding corrupt session cache");
                None
            }
        }
    }

    /// Persist the display name.
    pub fn save(&self, user_name: &str) -> Result<(), SessionError> {
        let stored = StoredSession {
            user_name: user_name.to_string(),
            saved_at: Utc::now(),
        };
        let raw = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Remove the cached name. Missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
