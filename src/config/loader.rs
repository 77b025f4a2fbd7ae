use std::path::Path;

use anyhow::{Context, Result};

use super::types::Config;

/// Load config from a `.cdabrc` file in the given directory, falling back
/// to the built-in defaults when the file is absent.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(".cdabrc");
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}
