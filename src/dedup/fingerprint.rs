use sha2::{Digest, Sha256};

/// Separator for the canonical identity string. Not expected inside rule
/// ids, package names, versions, or URIs.
const DELIMITER: &str = "|";

/// Compute the stable fingerprint for one vulnerability identity.
///
/// The four components are joined as `ruleId|name|version|uri` and hashed
/// with SHA-256; the result is the full lowercase hex digest. No salt and no
/// per-run entropy: rerunning over identical input must reproduce identical
/// fingerprints, since the alerting system keys alerts off this value across
/// scans.
pub fn fingerprint(
    rule_id: &str,
    package_name: &str,
    package_version: &str,
    location_uri: &str,
) -> String {
    let canonical = [rule_id, package_name, package_version, location_uri].join(DELIMITER);
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}
