use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Runner configuration, fully populated with the stock test-suite values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Test-suite image a new container is created from.
    pub image: String,
    /// Provider config file, relative to the working directory, copied
    /// into the container before each provider's tests.
    pub config_file: String,
    /// Where the config file lands inside the container.
    pub container_config_path: String,
    /// Directory inside the container where the suite writes its
    /// `{test}Results.json` files.
    pub container_results_dir: String,
    /// Host directory result artifacts are copied into, created on demand.
    pub results_dir: PathBuf,
    /// Human-readable description for every known test case. An artifact
    /// naming a test that is missing here fails aggregation.
    pub descriptions: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let descriptions = [
            ("TC101", "Service Reachability"),
            ("TC102", "Test 2.1"),
            ("TC201", "Basic Query"),
            ("TC202", "Complex Query (Geo-Time Filter)"),
            ("TC301", "Single Remote Online Download"),
            ("TC302", "Multiple Remote Online Download"),
        ]
        .into_iter()
        .map(|(id, text)| (id.to_string(), text.to_string()))
        .collect();

        Self {
            image: "ghcr.io/esacdab/cdab-testsuite:latest".to_string(),
            config_file: "config.yaml".to_string(),
            container_config_path: "/home/jenkins/config.yaml".to_string(),
            container_results_dir: "/home/jenkins".to_string(),
            results_dir: PathBuf::from("Results"),
            descriptions,
        }
    }
}
