//! End-to-end tests over a real osv-scanner SARIF document:
//! load, deduplicate, save, reload.

use std::path::Path;

use sarif_dedup::engine::{self, DedupError};
use sarif_dedup::sarif::{SarifLog, PRIMARY_LOCATION_LINE_HASH};

fn fixture_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/osv-scanner.sarif"
    ))
}

#[test]
fn dedup_collapses_repeated_vulnerabilities() {
    let mut log = engine::load_log(fixture_path()).unwrap();
    let stats = engine::dedup_log(&mut log);

    // fixture has 4 results, one of which repeats UBUNTU-CVE-2022-3219
    assert_eq!(stats.original, 4);
    assert_eq!(stats.unique, 3);
    assert_eq!(stats.removed(), 1);

    let rules: Vec<&str> = log.runs[0].results().iter().map(|r| r.rule_id()).collect();
    assert_eq!(
        rules,
        vec![
            "UBUNTU-CVE-2022-3219",
            "UBUNTU-CVE-2024-2236",
            "GHSA-4xh5-x5gv-qwph"
        ]
    );

    for result in log.runs[0].results() {
        let hash = &result.partial_fingerprints[PRIMARY_LOCATION_LINE_HASH];
        assert_eq!(hash.len(), 64);
    }
}

#[test]
fn saved_document_preserves_tool_metadata_and_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("deduped.sarif");

    let mut log = engine::load_log(fixture_path()).unwrap();
    engine::dedup_log(&mut log);
    engine::save_log(&log, &out_path, false).unwrap();

    let reloaded = engine::load_log(&out_path).unwrap();

    // everything outside results rides along untouched
    let tool = &reloaded.runs[0].extra["tool"];
    assert_eq!(tool["driver"]["name"], "osv-scanner");
    assert_eq!(reloaded.extra["version"], "2.1.0");

    // a second pass changes nothing
    let mut second = reloaded.clone();
    let stats = engine::dedup_log(&mut second);
    assert_eq!(stats.removed(), 0);
    assert_eq!(
        serde_json::to_value(&second).unwrap(),
        serde_json::to_value(&reloaded).unwrap()
    );
}

#[test]
fn fingerprints_are_reproducible_across_runs() {
    let run_once = || {
        let mut log = engine::load_log(fixture_path()).unwrap();
        engine::dedup_log(&mut log);
        log.runs[0].results()[0].partial_fingerprints[PRIMARY_LOCATION_LINE_HASH].clone()
    };
    assert_eq!(run_once(), run_once());
}

#[test]
fn in_place_rewrite_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.sarif");
    std::fs::copy(fixture_path(), &path).unwrap();

    let mut log = engine::load_log(&path).unwrap();
    engine::dedup_log(&mut log);
    engine::save_log(&log, &path, true).unwrap();

    let log: SarifLog = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(log.runs[0].results().len(), 3);
}

#[test]
fn result_without_locations_survives_with_a_fingerprint() {
    let mut log = engine::load_log(fixture_path()).unwrap();
    engine::dedup_log(&mut log);

    let pip = log.runs[0]
        .results()
        .iter()
        .find(|r| r.rule_id() == "GHSA-4xh5-x5gv-qwph")
        .unwrap();
    assert!(pip.partial_fingerprints.contains_key(PRIMARY_LOCATION_LINE_HASH));
}

#[test]
fn degenerate_documents_are_rejected_before_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-runs.sarif");
    std::fs::write(&path, r#"{"version": "2.1.0", "runs": []}"#).unwrap();
    assert!(matches!(engine::load_log(&path), Err(DedupError::NoRuns)));
}
