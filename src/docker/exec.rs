use std::process::Command;

use anyhow::{Context, Result};
use tracing::info;

use super::types::ExecOutput;

/// Run a full command line, blocking until the process exits.
///
/// Stdout and stderr are captured; captured stdout is echoed to the log
/// line by line. No timeout is applied, so a hung command hangs the run.
pub fn run_shell(command_line: &str) -> Result<ExecOutput> {
    let words = shell_words::split(command_line)
        .with_context(|| format!("failed to parse command line: {command_line}"))?;
    let (program, args) = words.split_first().context("empty command line")?;

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("failed to invoke `{program}` — is it installed and on PATH?"))?;

    let exec = ExecOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    };

    for line in exec.stdout.lines() {
        info!("{line}");
    }

    Ok(exec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let out = run_shell("echo hello world").expect("echo should run");
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "hello world");
    }

    #[test]
    fn splits_quoted_arguments() {
        let out = run_shell("echo 'one two' three").expect("echo should run");
        assert_eq!(out.stdout.trim(), "one two three");
    }

    #[test]
    fn reports_nonzero_exit_without_error() {
        let out = run_shell("sh -c 'exit 3'").expect("sh should run");
        assert!(!out.success());
        assert_eq!(out.exit_code, Some(3));
    }

    #[test]
    fn captures_stderr() {
        let out = run_shell("sh -c 'echo oops >&2'").expect("sh should run");
        assert!(out.success());
        assert_eq!(out.stderr.trim(), "oops");
    }

    #[test]
    fn rejects_empty_command_line() {
        assert!(run_shell("").is_err());
    }

    #[test]
    fn rejects_unbalanced_quotes() {
        assert!(run_shell("echo 'unterminated").is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        assert!(run_shell("definitely-not-a-real-binary-zzz").is_err());
    }
}
