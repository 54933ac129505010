use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level wifikeys configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WifikeysConfig {
    pub store: StoreConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Override for the user-store location.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Mask security keys in the table view.
    pub redact_keys: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { redact_keys: false }
    }
}

/// Load the user config file (~/.config/wifikeys/config.toml) if it exists.
fn load_user() -> Option<WifikeysConfig> {
    let dir = dirs::config_dir()?;
    let path = dir.join("wifikeys").join("config.toml");
    let content = std::fs::read_to_string(&path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("warning: failed to parse config at {}: {}", path.display(), e);
            None
        }
    }
}

/// Load config from a specific path, ignoring the user file.
fn load_from_path(path: &Path) -> WifikeysConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            eprintln!(
                "warning: failed to parse config at {}: {}",
                path.display(),
                e
            );
            WifikeysConfig::default()
        }),
        Err(e) => {
            eprintln!(
                "warning: failed to read config at {}: {}",
                path.display(),
                e
            );
            WifikeysConfig::default()
        }
    }
}

/// Load the config. If `override_path` is provided, use only that file.
/// Bad or missing config never aborts; it falls back to defaults.
pub fn load(override_path: Option<&PathBuf>) -> WifikeysConfig {
    match override_path {
        Some(path) => load_from_path(path),
        None => load_user().unwrap_or_default(),
    }
}
