// Suite orchestration: provider × test iteration against the suite container.

pub mod commands;
pub mod driver;
mod types;

pub use driver::run_tests;
pub use types::{ArtifactRef, CommandFailure, RunOutcome, RunReport, RunRequest};
