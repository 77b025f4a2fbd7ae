use std::fs;

use tracing::{info, warn};

use crate::config::Config;
use crate::docker::{self, ExecOutput};
use crate::report::{Aggregator, ReportError};

use super::commands::{
    artifact_file_name, copy_config_command, copy_results_command, exec_test_command,
};
use super::types::{ArtifactRef, CommandFailure, RunOutcome, RunReport, RunRequest};

/// Run every configured test against every provider, sequentially.
///
/// The docker daemon is probed once up front; when it is unreachable the
/// run reports [`RunOutcome::EngineUnavailable`] without touching any
/// container state. Failed external commands are recorded in the report
/// and never retried; the run presses on, and a test whose artifact never
/// appeared shows up under [`RunReport::missing_artifacts`]. The only
/// fatal condition is an aggregation error.
pub fn run_tests(cfg: &Config, request: &RunRequest) -> Result<RunOutcome, ReportError> {
    if !docker::is_available() {
        return Ok(RunOutcome::EngineUnavailable);
    }

    let container = request.container_name.as_str();
    let mut artifacts: Vec<ArtifactRef> = Vec::new();
    let mut failures: Vec<CommandFailure> = Vec::new();

    for provider in &request.providers {
        record(
            &mut failures,
            format!("ensure container {container} is running"),
            docker::ensure_running(container, &cfg.image),
        );
        record(
            &mut failures,
            format!("copy {} into {container}", cfg.config_file),
            docker::run_shell(&copy_config_command(cfg, container)),
        );

        for test in &request.tests {
            info!("executing {test} on {provider}");
            record(
                &mut failures,
                format!("execute {test} on {provider}"),
                docker::run_shell(&exec_test_command(container, provider, test)),
            );

            if let Err(err) = fs::create_dir_all(&cfg.results_dir) {
                warn!("could not create {}: {err}", cfg.results_dir.display());
                failures.push(CommandFailure {
                    operation: format!("create {}", cfg.results_dir.display()),
                    exit_code: None,
                    stderr: err.to_string(),
                });
            }

            let host_path = cfg
                .results_dir
                .join(artifact_file_name(container, test, provider));
            info!("copying results for {test} from {provider}");
            record(
                &mut failures,
                format!("copy results for {test} from {provider}"),
                docker::run_shell(&copy_results_command(cfg, container, test, &host_path)),
            );

            artifacts.push(ArtifactRef {
                container: container.to_string(),
                test: test.clone(),
                provider: provider.clone(),
                path: host_path,
            });
        }
    }

    if request.remove_container {
        info!("stopping and removing container {container}");
        record(
            &mut failures,
            format!("stop {container}"),
            docker::stop(container),
        );
        record(
            &mut failures,
            format!("remove {container}"),
            docker::remove(container),
        );
    }

    let report = Aggregator::new(cfg.descriptions.clone()).aggregate(&artifacts)?;

    Ok(RunOutcome::Completed(RunReport {
        results: report.results,
        missing_artifacts: report.missing,
        command_failures: failures,
    }))
}

/// Fold one command outcome into the failure list: launch errors and
/// non-zero exits are recorded, successes pass through silently.
fn record(
    failures: &mut Vec<CommandFailure>,
    operation: String,
    outcome: anyhow::Result<ExecOutput>,
) {
    match outcome {
        Ok(out) if out.success() => {}
        Ok(out) => {
            warn!(
                "{operation} exited with {:?}: {}",
                out.exit_code,
                out.stderr.trim()
            );
            failures.push(CommandFailure {
                operation,
                exit_code: out.exit_code,
                stderr: out.stderr,
            });
        }
        Err(err) => {
            warn!("{operation} failed to launch: {err:#}");
            failures.push(CommandFailure {
                operation,
                exit_code: None,
                stderr: format!("{err:#}"),
            });
        }
    }
}
