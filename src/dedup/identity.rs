use std::sync::LazyLock;

use regex::Regex;

/// Matches the package reference osv-scanner embeds in result messages,
/// e.g. "Package 'gnupg2@2.4.4-2ubuntu17.3' is vulnerable to ...".
static PACKAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Package '([^@]+)@([^']+)'").unwrap());

/// Extract package name and version from a finding's message text.
///
/// Pure function: the first `Package 'name@version'` occurrence wins, and a
/// message without one yields two empty strings rather than an error — the
/// fingerprint then falls back to rule id and location alone.
pub fn extract_package_info(message_text: &str) -> (String, String) {
    match PACKAGE_PATTERN.captures(message_text) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), String::new()),
    }
}
