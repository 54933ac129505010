use crate::error::{Error, Result};
use crate::profile::WifiProfile;
use std::process::Output;

/// Source of `netsh wlan` output.
///
/// Production shells out to netsh; tests substitute canned output. The
/// netsh text format is not a stable contract across Windows versions,
/// so all parsing of it stays inside this module.
pub trait WlanSource {
    /// Output of the profile listing command.
    fn list_output(&self) -> std::io::Result<Output>;
    /// Output of the per-profile detail command, secret revealed.
    fn profile_output(&self, ssid: &str) -> std::io::Result<Output>;
}

/// The real `netsh` command.
pub struct Netsh;

impl WlanSource for Netsh {
    fn list_output(&self) -> std::io::Result<Output> {
        std::process::Command::new("netsh")
            .args(["wlan", "show", "profiles"])
            .output()
    }

    fn profile_output(&self, ssid: &str) -> std::io::Result<Output> {
        // The ssid travels as a single argv element. Never build a shell
        // line here: profile names can contain quotes, ampersands, and
        // anything else a user typed into an access point config.
        std::process::Command::new("netsh")
            .args(["wlan", "show", "profile"])
            .arg(format!("name={}", ssid))
            .arg("key=clear")
            .output()
    }
}

const PROFILE_LABEL: &str = "All User Profile";
const CIPHER_LABEL: &str = "Cipher";
const KEY_LABEL: &str = "Key Content";

/// List saved profile names, in netsh output order.
///
/// A failed listing command is a hard error: nothing can be extracted
/// without it. Zero matching lines is a valid empty result.
pub fn list_profiles(source: &dyn WlanSource) -> Result<Vec<String>> {
    let output = source.list_output().map_err(|e| Error::Listing {
        detail: format!("failed to run netsh: {}", e),
    })?;
    if !output.status.success() {
        return Err(Error::Listing {
            detail: format!("netsh exited with {}", output.status),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_profile_list(&stdout))
}

/// Extract every saved profile with its secret.
///
/// Each profile is queried independently; one failing detail query is
/// logged and skipped without touching the rest. A profile removed
/// between listing and detail query lands here too.
pub fn extract_all(source: &dyn WlanSource) -> Result<Vec<WifiProfile>> {
    let ssids = list_profiles(source)?;
    let mut profiles = Vec::with_capacity(ssids.len());

    for ssid in ssids {
        match source.profile_output(&ssid) {
            Ok(output) if output.status.success() => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                profiles.push(parse_profile_detail(&ssid, &stdout));
            }
            Ok(output) => {
                eprintln!(
                    "warning: could not read details for '{}': netsh exited with {}",
                    ssid, output.status
                );
            }
            Err(e) => {
                eprintln!("warning: could not read details for '{}': {}", ssid, e);
            }
        }
    }

    Ok(profiles)
}

/// Pull profile names out of the listing. One name per line matching
/// the `All User Profile : <name>` label; the name is the trimmed
/// remainder after the colon.
fn parse_profile_list(stdout: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in stdout.lines() {
        if let Some((label, value)) = line.split_once(':')
            && label.trim() == PROFILE_LABEL
        {
            let name = value.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Build a profile from detail output: all `Cipher` values joined with
/// `/`, the first `Key Content` value as the secret. Lines that do not
/// match either label are ignored, so layout drift between Windows
/// versions degrades fields to absent rather than failing the profile.
fn parse_profile_detail(ssid: &str, stdout: &str) -> WifiProfile {
    let mut ciphers = Vec::new();
    let mut key = None;

    for line in stdout.lines() {
        let Some((label, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match label.trim() {
            CIPHER_LABEL => ciphers.push(value.to_string()),
            KEY_LABEL if key.is_none() => key = Some(value.to_string()),
            _ => {}
        }
    }

    WifiProfile::from_netsh(ssid.to_string(), ciphers, key)
}

// ExitStatus can only be fabricated through the unix extension trait,
// so these run on the Linux side only.
#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn ok_output(stdout: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(0),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        }
    }

    fn failed_output() -> Output {
        Output {
            status: ExitStatus::from_raw(1 << 8),
            stdout: Vec::new(),
            stderr: b"There is no wireless interface on the system.".to_vec(),
        }
    }

    /// Canned netsh with a configurable set of profiles that refuse
    /// their detail query.
    struct FakeNetsh {
        list: Output,
        details: Vec<(&'static str, &'static str)>,
        failing: Vec<&'static str>,
    }

    impl WlanSource for FakeNetsh {
        fn list_output(&self) -> std::io::Result<Output> {
            Ok(self.list.clone())
        }

        fn profile_output(&self, ssid: &str) -> std::io::Result<Output> {
            if self.failing.iter().any(|f| *f == ssid) {
                return Ok(failed_output());
            }
            let detail = self
                .details
                .iter()
                .find(|(name, _)| *name == ssid)
                .map(|(_, out)| *out)
                .unwrap_or("");
            Ok(ok_output(detail))
        }
    }

    const LISTING: &str = "\nProfiles on interface Wi-Fi:\n\
\nGroup policy profiles (read only)\n---------------------------------\n    <None>\n\
\nUser profiles\n-------------\n    All User Profile     : HomeWifi\n    All User Profile     : Office\n\n";

    const HOME_DETAIL: &str = "\nProfile HomeWifi on interface Wi-Fi:\n\
\nSecurity settings\n-----------------\n    Authentication         : WPA2-Personal\n    Cipher                 : CCMP\n    Cipher                 : TKIP\n    Security key           : Present\n    Key Content            : hunter22\n";

    const OFFICE_DETAIL: &str = "\nSecurity settings\n-----------------\n    Authentication         : WPA2-Personal\n    Cipher                 : CCMP\n    Security key           : Present\n";

    #[test]
    fn test_parse_profile_list() {
        let names = parse_profile_list(LISTING);
        assert_eq!(names, vec!["HomeWifi", "Office"]);
    }

    #[test]
    fn test_parse_profile_list_empty() {
        assert!(parse_profile_list("Profiles on interface Wi-Fi:\n").is_empty());
    }

    #[test]
    fn test_parse_detail_joins_ciphers() {
        let p = parse_profile_detail("HomeWifi", HOME_DETAIL);
        assert_eq!(p.ssid, "HomeWifi");
        assert_eq!(p.ciphers.as_deref(), Some("CCMP/TKIP"));
        assert_eq!(p.security_key.as_deref(), Some("hunter22"));
    }

    #[test]
    fn test_parse_detail_missing_key_content() {
        let p = parse_profile_detail("Office", OFFICE_DETAIL);
        assert_eq!(p.ciphers.as_deref(), Some("CCMP"));
        assert_eq!(p.security_key, None);
    }

    #[test]
    fn test_parse_detail_garbage_degrades_to_absent() {
        let p = parse_profile_detail("Odd", "completely unexpected output\nno labels here\n");
        assert_eq!(p.ssid, "Odd");
        assert_eq!(p.ciphers, None);
        assert_eq!(p.security_key, None);
    }

    #[test]
    fn test_extract_all_preserves_listing_order() {
        let fake = FakeNetsh {
            list: ok_output(LISTING),
            details: vec![("HomeWifi", HOME_DETAIL), ("Office", OFFICE_DETAIL)],
            failing: vec![],
        };
        let profiles = extract_all(&fake).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].ssid, "HomeWifi");
        assert_eq!(profiles[1].ssid, "Office");
    }

    #[test]
    fn test_extract_all_partial_failure_isolated() {
        let fake = FakeNetsh {
            list: ok_output(
                "    All User Profile     : Alpha\n    All User Profile     : Bravo\n    All User Profile     : Charlie\n",
            ),
            details: vec![("Alpha", HOME_DETAIL), ("Charlie", OFFICE_DETAIL)],
            failing: vec!["Bravo"],
        };
        let profiles = extract_all(&fake).unwrap();
        let ssids: Vec<&str> = profiles.iter().map(|p| p.ssid.as_str()).collect();
        assert_eq!(ssids, vec!["Alpha", "Charlie"]);
        assert_eq!(profiles[0].security_key.as_deref(), Some("hunter22"));
    }

    #[test]
    fn test_listing_failure_is_fatal() {
        let fake = FakeNetsh {
            list: failed_output(),
            details: vec![],
            failing: vec![],
        };
        assert!(matches!(
            extract_all(&fake).unwrap_err(),
            Error::Listing { .. }
        ));
    }
}
