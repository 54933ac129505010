pub mod linux;
pub mod windows;

use crate::error::Result;
use crate::platform::Platform;
use crate::profile::WifiProfile;

/// Run the extraction strategy for the detected platform.
///
/// Every call produces a fresh sequence; nothing is cached between
/// calls. Recoverable per-item failures have already been logged and
/// dropped by the extractors; only "nothing could be attempted" errors
/// surface here.
pub fn extract(platform: Platform) -> Result<Vec<WifiProfile>> {
    match platform {
        Platform::Windows => windows::extract_all(&windows::Netsh),
        Platform::Linux => Ok(linux::ConnectionsDir::system().extract_all()),
    }
}
