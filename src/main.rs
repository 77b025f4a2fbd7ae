use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cdab_runner::config;
use cdab_runner::suite::{RunOutcome, RunRequest, run_tests};

/// Run CDAB conformance tests against data providers in a docker container.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Name for the suite container. An existing container with this name
    /// is reused; otherwise one is created from the configured image.
    #[arg(long, default_value = "testsite-1")]
    container_name: String,

    /// Test cases to execute, in order.
    #[arg(long, value_delimiter = ',', default_value = "TC101")]
    tests: Vec<String>,

    /// Providers to run every test against, in order.
    #[arg(long, value_delimiter = ',', default_value = "cdse")]
    providers: Vec<String>,

    /// Stop and remove the container once the run finishes. Without this
    /// the container keeps running for the next invocation.
    #[arg(long)]
    remove_container: bool,

    /// Directory holding the provider config file and an optional
    /// `.cdabrc`. Defaults to the current directory.
    #[arg(long)]
    workdir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Some(dir) = &args.workdir {
        std::env::set_current_dir(dir)?;
    }

    let cfg = config::load(&std::env::current_dir()?)?;
    let request = RunRequest {
        container_name: args.container_name,
        tests: args.tests,
        providers: args.providers,
        remove_container: args.remove_container,
    };

    match run_tests(&cfg, &request)? {
        RunOutcome::EngineUnavailable => {
            eprintln!("docker daemon is not reachable; start docker and retry");
            std::process::exit(2);
        }
        RunOutcome::Completed(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
