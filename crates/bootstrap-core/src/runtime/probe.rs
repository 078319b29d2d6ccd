//! Host tool capability probes
//!
//! The pipeline never hard-requires git; it probes for it and degrades
//! (skip git init, empty author) when it is missing.

use std::process::Command;

/// Check if a tool is installed and available in PATH.
pub fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
