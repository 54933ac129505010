use crate::profile::WifiProfile;
use std::path::{Path, PathBuf};

/// NetworkManager keeps one ini-style file per saved connection here.
const SYSTEM_CONNECTIONS: &str = "/etc/NetworkManager/system-connections";

/// The four keys we recover from a connection file. They are accepted
/// from any section: NetworkManager has moved keys between sections
/// across versions, and third-party writers are loose about placement.
/// If two sections define the same key, the later one wins.
const FIELDS: [&str; 4] = ["ssid", "auth-alg", "key-mgmt", "psk"];

/// Abstraction over the NetworkManager connections directory.
/// Defaults to the system path, redirectable to a temp directory for
/// testing.
#[derive(Debug, Clone)]
pub struct ConnectionsDir {
    root: PathBuf,
}

impl Default for ConnectionsDir {
    fn default() -> Self {
        Self {
            root: PathBuf::from(SYSTEM_CONNECTIONS),
        }
    }
}

impl ConnectionsDir {
    /// The real system directory.
    pub fn system() -> Self {
        Self::default()
    }

    /// A custom directory (for testing).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Extract every saved connection, one profile per file.
    ///
    /// A missing directory is a recoverable condition: NetworkManager
    /// may simply not be installed. It yields an empty result with a
    /// diagnostic, not an error. Unreadable files are skipped the same
    /// way; files that never name an ssid are dropped.
    pub fn extract_all(&self) -> Vec<WifiProfile> {
        if !self.root.exists() {
            eprintln!(
                "warning: {} not found; is NetworkManager installed?",
                self.root.display()
            );
            return Vec::new();
        }

        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("warning: cannot read {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        let mut profiles = Vec::new();
        for path in paths {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    if let Some(profile) = parse_connection(&content) {
                        profiles.push(profile);
                    }
                }
                Err(e) => {
                    eprintln!("warning: cannot read {}: {}", path.display(), e);
                }
            }
        }
        profiles
    }
}

/// Parse one connection file. Sections are `[name]` headers; entries
/// are `key=value` lines. Only the recognized keys are kept, wherever
/// they appear.
fn parse_connection(content: &str) -> Option<WifiProfile> {
    let mut values: [Option<String>; 4] = [None, None, None, None];

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            // Section headers only delimit; key lookup ignores them.
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if let Some(idx) = FIELDS.iter().position(|f| *f == key) {
            values[idx] = Some(value.trim().to_string());
        }
    }

    let [ssid, auth_alg, key_mgmt, psk] = values;
    let ssid = ssid.filter(|s| !s.is_empty())?;
    Some(WifiProfile::from_network_manager(
        ssid, auth_alg, key_mgmt, psk,
    ))
}
