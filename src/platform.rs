use crate::error::{Error, Result};

/// Which credential source the extraction engine will read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `netsh wlan` command output.
    Windows,
    /// NetworkManager system-connections directory.
    Linux,
}

impl Platform {
    /// Detect the extraction strategy for the running OS.
    ///
    /// Anything other than Windows or Linux is a hard error; there is
    /// no silent fallback to either strategy.
    pub fn detect() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(Error::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }
}
