use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::suite::ArtifactRef;

/// On-disk artifact shape: a JSON object with a `testCaseResults` array.
/// A missing array is treated as an empty run.
#[derive(Debug, Deserialize)]
pub(super) struct ResultArtifact {
    #[serde(default, rename = "testCaseResults")]
    pub test_case_results: Vec<RawCaseResult>,
}

/// One `testCaseResults` entry exactly as the in-container runner wrote it.
#[derive(Debug, Deserialize)]
pub(super) struct RawCaseResult {
    #[serde(rename = "testName")]
    pub test_name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// One test-case result enriched with provider identity and a
/// human-readable description.
///
/// Every field the runner wrote besides `testName` rides along unchanged
/// in `fields` and serializes back out at the top level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCaseResult {
    #[serde(rename = "testName")]
    pub test_name: String,
    pub provider: String,
    pub description: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Aggregated results plus the artifacts that never materialized on disk.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub results: Vec<TestCaseResult>,
    pub missing: Vec<ArtifactRef>,
}

#[derive(Debug, Error)]
pub enum ReportError {
    /// The description table is authoritative; an unknown test name means
    /// the artifact and the table are out of sync, and the run must not
    /// produce a partial report.
    #[error("no description registered for test {0:?}")]
    UnknownTest(String),
    #[error("malformed result artifact {path}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read result artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
