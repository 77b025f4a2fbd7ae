use std::path::Path;

use crate::config::Config;

/// `docker cp` command placing the provider config inside the container.
pub fn copy_config_command(cfg: &Config, container: &str) -> String {
    format!(
        "docker cp {} {container}:{}",
        cfg.config_file, cfg.container_config_path
    )
}

/// `docker exec` command running one test case against one provider.
///
/// `-tsn` names the test session after the container; `-tn` selects the
/// target provider.
pub fn exec_test_command(container: &str, provider: &str, test: &str) -> String {
    format!("docker exec {container} cdab-client -v -tsn={container} -tn={provider} {test}")
}

/// Host file name for one artifact: `{container}-{test}-{provider}-results.json`.
pub fn artifact_file_name(container: &str, test: &str, provider: &str) -> String {
    format!("{container}-{test}-{provider}-results.json")
}

/// `docker cp` command recovering one result artifact to `host_path`.
pub fn copy_results_command(cfg: &Config, container: &str, test: &str, host_path: &Path) -> String {
    format!(
        "docker cp {container}:{}/{test}Results.json {}",
        cfg.container_results_dir,
        host_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn copy_config_targets_fixed_container_path() {
        let cfg = Config::default();
        assert_eq!(
            copy_config_command(&cfg, "testsite-1"),
            "docker cp config.yaml testsite-1:/home/jenkins/config.yaml"
        );
    }

    #[test]
    fn exec_command_carries_session_provider_and_test() {
        assert_eq!(
            exec_test_command("testsite-1", "cdse", "TC101"),
            "docker exec testsite-1 cdab-client -v -tsn=testsite-1 -tn=cdse TC101"
        );
    }

    #[test]
    fn artifact_file_name_is_deterministic() {
        assert_eq!(
            artifact_file_name("t1", "TC101", "cdse"),
            "t1-TC101-cdse-results.json"
        );
    }

    #[test]
    fn copy_results_reads_per_test_file() {
        let cfg = Config::default();
        let host = PathBuf::from("Results/t1-TC101-cdse-results.json");
        assert_eq!(
            copy_results_command(&cfg, "t1", "TC101", &host),
            "docker cp t1:/home/jenkins/TC101Results.json Results/t1-TC101-cdse-results.json"
        );
    }

    #[test]
    fn configured_paths_flow_into_commands() {
        let cfg = Config {
            config_file: "sites.yaml".into(),
            container_config_path: "/opt/suite/config.yaml".into(),
            container_results_dir: "/opt/suite".into(),
            ..Config::default()
        };
        assert_eq!(
            copy_config_command(&cfg, "t1"),
            "docker cp sites.yaml t1:/opt/suite/config.yaml"
        );
        let host = PathBuf::from("out/t1-TC201-asf-results.json");
        assert_eq!(
            copy_results_command(&cfg, "t1", "TC201", &host),
            "docker cp t1:/opt/suite/TC201Results.json out/t1-TC201-asf-results.json"
        );
    }
}
