use std::collections::BTreeMap;
use std::fs;

use crate::suite::ArtifactRef;

use super::types::{Report, ReportError, ResultArtifact, TestCaseResult};

/// Turns recovered artifacts into one flat, ordered result list.
///
/// Owns an immutable test description table, handed in at construction.
pub struct Aggregator {
    descriptions: BTreeMap<String, String>,
}

impl Aggregator {
    pub fn new(descriptions: BTreeMap<String, String>) -> Self {
        Self { descriptions }
    }

    /// Load every artifact, in order, enriching each test-case result with
    /// its provider and description. Results keep artifact order first,
    /// in-file order second; nothing is sorted or deduplicated.
    ///
    /// An artifact whose file never appeared on disk is skipped and listed
    /// under [`Report::missing`] instead of failing the aggregation. A test
    /// name absent from the description table fails the whole call.
    pub fn aggregate(&self, artifacts: &[ArtifactRef]) -> Result<Report, ReportError> {
        let mut report = Report::default();

        for artifact in artifacts {
            if !artifact.path.exists() {
                report.missing.push(artifact.clone());
                continue;
            }

            let raw = fs::read_to_string(&artifact.path).map_err(|source| ReportError::Io {
                path: artifact.path.clone(),
                source,
            })?;
            let parsed: ResultArtifact =
                serde_json::from_str(&raw).map_err(|source| ReportError::Artifact {
                    path: artifact.path.clone(),
                    source,
                })?;

            for case in parsed.test_case_results {
                let description = self
                    .descriptions
                    .get(&case.test_name)
                    .ok_or_else(|| ReportError::UnknownTest(case.test_name.clone()))?;

                report.results.push(TestCaseResult {
                    test_name: case.test_name,
                    provider: artifact.provider.clone(),
                    description: description.clone(),
                    fields: case.fields,
                });
            }
        }

        Ok(report)
    }
}
