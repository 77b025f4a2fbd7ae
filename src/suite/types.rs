use std::path::PathBuf;

use serde::Serialize;

use crate::report::TestCaseResult;

/// Parameters for one suite run.
///
/// Providers and tests are iterated exactly as given: order preserved,
/// duplicates preserved.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub container_name: String,
    pub tests: Vec<String>,
    pub providers: Vec<String>,
    /// Stop and remove the container when the run finishes. Off by
    /// default so the container is reused by later runs.
    pub remove_container: bool,
}

/// Identifies one recovered result artifact: which container, test and
/// provider produced it, and where its copy landed on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactRef {
    pub container: String,
    pub test: String,
    pub provider: String,
    pub path: PathBuf,
}

/// One external command that exited non-zero or failed to launch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandFailure {
    /// What the command was doing, e.g. `execute TC101 on cdse`.
    pub operation: String,
    /// `None` when the process never ran or was killed by a signal.
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Everything a completed run produced.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// All test-case results, in provider-then-test iteration order.
    pub results: Vec<TestCaseResult>,
    /// Artifacts that were expected but never appeared on the host.
    pub missing_artifacts: Vec<ArtifactRef>,
    /// External commands that failed along the way. The run does not
    /// stop for these; a failed exec or copy surfaces as a missing
    /// artifact further down.
    pub command_failures: Vec<CommandFailure>,
}

/// Outcome of [`run_tests`](crate::suite::run_tests).
#[derive(Debug)]
pub enum RunOutcome {
    /// The docker daemon could not be reached. Nothing was executed and
    /// no container state was touched.
    EngineUnavailable,
    Completed(RunReport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_ref_round_trips_to_json() {
        let artifact = ArtifactRef {
            container: "t1".into(),
            test: "TC101".into(),
            provider: "cdse".into(),
            path: PathBuf::from("Results/t1-TC101-cdse-results.json"),
        };
        let json = serde_json::to_value(&artifact).unwrap();
        assert_eq!(json["container"], "t1");
        assert_eq!(json["provider"], "cdse");
    }
}
