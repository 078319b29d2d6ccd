//! One-shot template init script: run once, then delete
//!
//! Templates may bundle an optional setup script at one of two fixed
//! locations. The first one found is executed with the project directory as
//! working directory and removed afterwards regardless of its exit status.
//! Having no init script is the common case, not an error.

use crate::error::Result;
use crate::runtime::process;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::fs;

const CANDIDATES: &[&str] = &["init.js", "scripts/init.js"];

/// Locate the init script, honoring the fixed candidate order.
pub fn find(directory: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|candidate| directory.join(candidate))
        .find(|path| path.is_file())
}

/// Run and delete the init script if the template shipped one.
/// Returns whether a script ran.
pub async fn maybe_run(directory: &Path) -> Result<bool> {
    let Some(script) = find(directory) else {
        return Ok(false);
    };

    println!("\nExecuting script {}...", "init.js".cyan());
    let script_arg = script.to_string_lossy();
    // The exit status is deliberately ignored; only a spawn failure aborts.
    let _status = process::run("node", &[script_arg.as_ref()], directory).await?;

    println!("Deleting script {}...", "init.js".cyan());
    fs::remove_file(&script).await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn finds_nothing_in_plain_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(find(dir.path()), None);
    }

    #[test]
    fn finds_nested_candidate() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("scripts")).unwrap();
        std::fs::write(dir.path().join("scripts/init.js"), b"").unwrap();

        assert_eq!(find(dir.path()), Some(dir.path().join("scripts/init.js")));
    }

    #[test]
    fn top_level_candidate_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("init.js"), b"").unwrap();
        std::fs::create_dir(dir.path().join("scripts")).unwrap();
        std::fs::write(dir.path().join("scripts/init.js"), b"").unwrap();

        assert_eq!(find(dir.path()), Some(dir.path().join("init.js")));
    }
}
