use serde::Serialize;

/// A saved wireless network profile, normalized across platforms.
///
/// The record shape is fixed: fields a platform cannot supply are `None`
/// rather than missing. Windows fills `ciphers`; Linux fills `auth_alg`
/// and `key_mgmt`. Profiles are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiProfile {
    /// Network name. Always non-empty; a profile with no recoverable
    /// name is never emitted.
    pub ssid: String,
    /// The stored secret, when the OS revealed one in clear text.
    pub security_key: Option<String>,
    /// Slash-joined cipher list (Windows).
    pub ciphers: Option<String>,
    /// Authentication algorithm (Linux `auth-alg`).
    pub auth_alg: Option<String>,
    /// Key management scheme (Linux `key-mgmt`).
    pub key_mgmt: Option<String>,
}

impl WifiProfile {
    /// Normalize the raw shape parsed from `netsh wlan show profile`.
    pub fn from_netsh(ssid: String, ciphers: Vec<String>, key: Option<String>) -> Self {
        let ciphers = if ciphers.is_empty() {
            None
        } else {
            Some(ciphers.join("/"))
        };
        Self {
            ssid,
            security_key: key,
            ciphers,
            auth_alg: None,
            key_mgmt: None,
        }
    }

    /// Normalize the raw shape parsed from a NetworkManager connection file.
    pub fn from_network_manager(
        ssid: String,
        auth_alg: Option<String>,
        key_mgmt: Option<String>,
        psk: Option<String>,
    ) -> Self {
        Self {
            ssid,
            security_key: psk,
            ciphers: None,
            auth_alg,
            key_mgmt,
        }
    }
}
