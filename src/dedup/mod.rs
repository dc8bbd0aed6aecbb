//! Fingerprint-based deduplication of SARIF results.
//!
//! Scanners like osv-scanner report the same vulnerability several times
//! (once per advisory source, typically) with no fingerprint for the
//! alerting system to merge on. Each result gets a deterministic identity
//! hash over `(ruleId, packageName, packageVersion, locationUri)`, and only
//! the first result per fingerprint survives.

pub mod fingerprint;
pub mod identity;

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::sarif::{SarifResult, PRIMARY_LOCATION_LINE_HASH};

/// Compute the identity fingerprint for one result.
pub fn result_fingerprint(result: &SarifResult) -> String {
    let (package_name, package_version) = identity::extract_package_info(result.message_text());
    fingerprint::fingerprint(
        result.rule_id(),
        &package_name,
        &package_version,
        result.location_uri(),
    )
}

/// Annotate every result with its fingerprint and drop later duplicates.
///
/// First-wins: when two results share a fingerprint, the earlier one is
/// retained even if the later one carries richer detail. Output order is the
/// first-seen order of each fingerprint; nothing is sorted. Running this on
/// its own output is a no-op.
pub fn deduplicate(mut results: Vec<SarifResult>) -> Vec<SarifResult> {
    for result in &mut results {
        let hash = result_fingerprint(result);
        result
            .partial_fingerprints
            .insert(PRIMARY_LOCATION_LINE_HASH.to_string(), hash);
    }

    let mut seen = HashSet::new();
    results.retain(|r| {
        let hash = &r.partial_fingerprints[PRIMARY_LOCATION_LINE_HASH];
        let keep = seen.insert(hash.clone());
        if !keep {
            debug!("Dropping duplicate of {} ({})", r.rule_id(), hash);
        }
        keep
    });

    results
}

/// Per-rule duplicate counts for one batch of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTally {
    pub rule_id: String,
    pub total: usize,
    pub duplicates: usize,
}

/// Count occurrences and duplicates per rule without touching the results.
/// Sorted by duplicate count (highest first), then rule id.
pub fn tally_by_rule(results: &[SarifResult]) -> Vec<RuleTally> {
    let mut per_rule: BTreeMap<&str, (usize, HashSet<String>)> = BTreeMap::new();
    for result in results {
        let entry = per_rule.entry(result.rule_id()).or_default();
        entry.0 += 1;
        entry.1.insert(result_fingerprint(result));
    }

    let mut tallies: Vec<RuleTally> = per_rule
        .into_iter()
        .map(|(rule_id, (total, distinct))| RuleTally {
            rule_id: rule_id.to_string(),
            total,
            duplicates: total - distinct.len(),
        })
        .collect();
    tallies.sort_by(|a, b| b.duplicates.cmp(&a.duplicates).then(a.rule_id.cmp(&b.rule_id)));
    tallies
}
