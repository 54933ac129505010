use crate::profile::WifiProfile;
use colored::Colorize;

const ABSENT: &str = "None";
const REDACTED: &str = "********";

/// Column widths for the table view.
const SSID_W: usize = 24;
const FIELD_W: usize = 14;

// Pad before coloring: ANSI escape codes would otherwise count
// against the format width and break column alignment.
fn cell(value: &str, width: usize) -> String {
    format!("{:<width$}", value)
}

/// Print profiles as an aligned table. Absent fields render as the
/// `None` sentinel so every row has the same shape regardless of
/// which platform produced it.
pub fn print_table(profiles: &[WifiProfile], redact_keys: bool) {
    if profiles.is_empty() {
        println!("{}", "No saved Wi-Fi profiles found.".yellow());
        return;
    }

    println!(
        "{} {} {} {} {}",
        cell("SSID", SSID_W).bold(),
        cell("Ciphers", FIELD_W).bold(),
        cell("Auth Alg", FIELD_W).bold(),
        cell("Key Mgmt", FIELD_W).bold(),
        "Key".bold(),
    );

    for p in profiles {
        let key = match (&p.security_key, redact_keys) {
            (Some(_), true) => REDACTED.to_string(),
            (Some(key), false) => key.clone(),
            (None, _) => ABSENT.to_string(),
        };
        println!(
            "{} {} {} {} {}",
            cell(&p.ssid, SSID_W).cyan(),
            cell(p.ciphers.as_deref().unwrap_or(ABSENT), FIELD_W),
            cell(p.auth_alg.as_deref().unwrap_or(ABSENT), FIELD_W),
            cell(p.key_mgmt.as_deref().unwrap_or(ABSENT), FIELD_W),
            key.green(),
        );
    }

    println!();
    println!(
        "  {} profile{}",
        profiles.len(),
        if profiles.len() == 1 { "" } else { "s" }
    );
}

/// Print profiles as pretty JSON. Absent fields serialize as null.
pub fn print_json(profiles: &[WifiProfile]) {
    match serde_json::to_string_pretty(profiles) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: failed to serialize profiles: {}", e),
    }
}
