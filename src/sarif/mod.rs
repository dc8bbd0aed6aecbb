//! Minimal serde model of the SARIF 2.1.0 slice this tool touches.
//!
//! Only the fields involved in fingerprinting are typed; everything else is
//! captured by flattened maps so an input document round-trips unchanged.
//! Schema validation is deliberately out of scope — a malformed result just
//! contributes empty identity components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fingerprint key recognized by GitHub Code Scanning for alert merging.
pub const PRIMARY_LOCATION_LINE_HASH: &str = "primaryLocationLineHash";

/// Top-level SARIF document ("log" in SARIF terms)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifLog {
    #[serde(default)]
    pub runs: Vec<SarifRun>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One scanner invocation's output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifRun {
    /// `None` when the run carried no `results` key at all. The engine
    /// always writes the key back (possibly empty) for the run it
    /// processes; other runs keep their original shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SarifResult>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SarifRun {
    /// Results as a slice, empty when the key is absent
    pub fn results(&self) -> &[SarifResult] {
        self.results.as_deref().unwrap_or(&[])
    }
}

/// One reported vulnerability occurrence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifResult {
    /// Vulnerability class identifier, e.g. "UBUNTU-CVE-2022-3219"
    #[serde(rename = "ruleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<SarifMessage>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SarifLocation>,

    /// Hash map consumed by the alerting system to merge duplicate alerts.
    /// The engine writes `primaryLocationLineHash`; other keys pass through.
    #[serde(
        rename = "partialFingerprints",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub partial_fingerprints: BTreeMap<String, String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifLocation {
    #[serde(rename = "physicalLocation", skip_serializing_if = "Option::is_none")]
    pub physical_location: Option<SarifPhysicalLocation>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation", skip_serializing_if = "Option::is_none")]
    pub artifact_location: Option<SarifArtifactLocation>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifArtifactLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SarifResult {
    /// Rule identifier, empty string when the scanner omitted it
    pub fn rule_id(&self) -> &str {
        self.rule_id.as_deref().unwrap_or("")
    }

    /// Human-readable message text, empty string when absent
    pub fn message_text(&self) -> &str {
        self.message
            .as_ref()
            .and_then(|m| m.text.as_deref())
            .unwrap_or("")
    }

    /// URI of the first location's artifact, empty string when absent.
    /// SARIF allows results with no locations at all; that is not an error.
    pub fn location_uri(&self) -> &str {
        self.locations
            .first()
            .and_then(|l| l.physical_location.as_ref())
            .and_then(|p| p.artifact_location.as_ref())
            .and_then(|a| a.uri.as_deref())
            .unwrap_or("")
    }
}
