//! Scoped child process invocation with inherited I/O
//!
//! The child's standard streams are connected directly to the invoking
//! process's streams so the operator sees live output. Awaiting the child is
//! the pipeline's suspension point for every external command. A spawn
//! failure (executable missing, permission denied) is an error; a non-zero
//! exit from a successfully spawned child is surfaced in the returned status
//! and left to the caller's policy.

use crate::error::{Error, Result};
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Run `command args..` with `cwd` as working directory and wait for it.
pub async fn run(command: &str, args: &[&str], cwd: &Path) -> Result<ExitStatus> {
    let rendered = render(command, args);

    let mut child = Command::new(command)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Subprocess {
            command: rendered.clone(),
            source,
        })?;

    // The child is always waited on; no orphaned process escapes this scope.
    let status = child.wait().await.map_err(|source| Error::Subprocess {
        command: rendered,
        source,
    })?;

    Ok(status)
}

fn render(command: &str, args: &[&str]) -> String {
    std::iter::once(command)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
