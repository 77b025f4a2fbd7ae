use std::process::Command;

use anyhow::{Context, Result};
use tracing::info;

use super::exec::run_shell;
use super::types::ExecOutput;

/// Whether a container named `name` is known to the engine, running or not.
///
/// There is no ownership tagging: a foreign container that happens to use
/// the same name is indistinguishable from one of ours.
pub fn exists(name: &str) -> Result<bool> {
    let output = Command::new("docker")
        .args(["ps", "--all", "--format", "{{.Names}}"])
        .output()
        .context("failed to list containers")?;
    let listing = String::from_utf8_lossy(&output.stdout);
    Ok(name_in_listing(&listing, name))
}

/// Exact-match lookup in a one-name-per-line `docker ps` listing.
fn name_in_listing(listing: &str, name: &str) -> bool {
    listing.lines().any(|line| line.trim() == name)
}

/// Make sure the named container exists and is started.
///
/// An existing container is started in place rather than recreated, so a
/// stopped container left over from an earlier run is picked up again.
/// Starting an already-running container is a no-op for the suite image.
pub fn ensure_running(name: &str, image: &str) -> Result<ExecOutput> {
    if exists(name)? {
        info!("container {name} already exists, starting it");
        run_shell(&format!("docker start {name}"))
    } else {
        info!("creating container {name} from {image}");
        run_shell(&format!("docker run --detach --name {name} {image}"))
    }
}

/// Stop the named container.
pub fn stop(name: &str) -> Result<ExecOutput> {
    run_shell(&format!("docker stop {name}"))
}

/// Remove the named container.
pub fn remove(name: &str) -> Result<ExecOutput> {
    run_shell(&format!("docker rm {name}"))
}
