// Docker plumbing: daemon probe, blocking command execution, container lifecycle.

pub mod container;
pub mod engine;
pub mod exec;
pub mod types;

pub use container::{ensure_running, exists, remove, stop};
pub use engine::is_available;
pub use exec::run_shell;
pub use types::ExecOutput;
