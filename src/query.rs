use crate::profile::WifiProfile;

/// Filter profiles by a case-insensitive ssid substring match.
///
/// An absent or empty query returns the input unchanged. Relative
/// order is preserved, which also makes the filter idempotent.
pub fn filter(profiles: Vec<WifiProfile>, query: Option<&str>) -> Vec<WifiProfile> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return profiles;
    };
    let needle = query.to_lowercase();
    profiles
        .into_iter()
        .filter(|p| p.ssid.to_lowercase().contains(&needle))
        .collect()
}
