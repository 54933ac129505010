use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One registered account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// bcrypt hash, never the plain secret.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// File-backed account store.
///
/// Opened once at startup and passed by reference into the gate
/// operations; the file on disk is re-read per operation and written
/// back atomically via a temp-file rename, so there is no long-lived
/// connection state to leak on early exits.
#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Default location: `<data dir>/wifikeys/users.json`.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wifikeys")
            .join("users.json")
    }

    /// Open a store at `path`, creating parent directories so the
    /// first save cannot fail on a missing directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Store {
                path: path.clone(),
                detail: format!("cannot create parent directory: {}", e),
            })?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all accounts. A store that does not exist yet is empty.
    pub fn load(&self) -> Result<Vec<UserRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Store {
                    path: self.path.clone(),
                    detail: e.to_string(),
                });
            }
        };
        serde_json::from_str(&content).map_err(|e| Error::Store {
            path: self.path.clone(),
            detail: format!("corrupt user store: {}", e),
        })
    }

    /// Persist all accounts, replacing the file atomically.
    pub fn save(&self, users: &[UserRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(users).map_err(|e| Error::Store {
            path: self.path.clone(),
            detail: e.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| Error::Store {
            path: tmp.clone(),
            detail: e.to_string(),
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|e| Error::Store {
            path: self.path.clone(),
            detail: e.to_string(),
        })
    }
}
