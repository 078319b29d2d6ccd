//! Directory conflict gate
//!
//! Decides whether a target directory may be scaffolded into. The tool never
//! merges into a non-empty directory: anything that is not a known benign
//! artifact or a stale log from a previous failed install is a conflict and
//! halts the pipeline before it mutates the directory.

use colored::Colorize;
use std::io;
use std::path::Path;
use tokio::fs;

/// Entries tolerated in the target directory: VCS metadata, license/readme,
/// docs, IDE folders, CI config.
const VALID_FILES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitattributes",
    ".gitignore",
    ".gitlab-ci.yml",
    ".hg",
    ".hgcheck",
    ".hgignore",
    ".idea",
    ".npmignore",
    ".travis.yml",
    "docs",
    "LICENSE",
    "README.md",
    "mkdocs.yml",
    "Thumbs.db",
];

// These files should be allowed to remain from a failed install, but then
// silently removed during the next create.
const ERROR_LOG_PREFIXES: &[&str] = &["npm-debug.log", "yarn-error.log", "yarn-debug.log"];

/// A filesystem entry that blocks scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Outcome of the safety check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Conflicts(Vec<ConflictEntry>),
}

fn is_error_log(name: &str) -> bool {
    ERROR_LOG_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Partition the directory's immediate entries into benign, stale-log and
/// conflicting. Any conflict wins; otherwise stale logs are cleaned up as a
/// side effect of the Safe verdict.
pub async fn check(directory: &Path) -> io::Result<Verdict> {
    let mut conflicts = Vec::new();
    let mut stale_logs = Vec::new();

    let mut entries = fs::read_dir(directory).await?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();

        if VALID_FILES.contains(&name.as_str()) {
            continue;
        }
        if is_error_log(&name) {
            stale_logs.push(entry.path());
            continue;
        }

        let is_dir = entry
            .file_type()
            .await
            .map(|file_type| file_type.is_dir())
            .unwrap_or(false);
        conflicts.push(ConflictEntry { name, is_dir });
    }

    if !conflicts.is_empty() {
        conflicts.sort_by(|a, b| a.name.cmp(&b.name));
        return Ok(Verdict::Conflicts(conflicts));
    }

    // Remove any log files from a previous installation.
    for path in stale_logs {
        fs::remove_file(&path).await?;
    }

    Ok(Verdict::Safe)
}

/// Render the conflict listing for operator diagnosis, marking directories
/// distinctly from files.
pub fn print_conflicts(app_name: &str, entries: &[ConflictEntry]) {
    println!(
        "\nThe directory {} contains files that could conflict:\n",
        app_name.green()
    );
    for entry in entries {
        if entry.is_dir {
            println!("  {}", format!("{}/", entry.name).blue());
        } else {
            println!("  {}", entry.name);
        }
    }
    println!("\nEither try using a new directory name, or remove the files listed above.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[tokio::test]
    async fn empty_directory_is_safe() {
        let dir = TempDir::new().unwrap();
        assert_eq!(check(dir.path()).await.unwrap(), Verdict::Safe);
    }

    #[tokio::test]
    async fn allow_listed_entries_are_safe() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "README.md");
        touch(dir.path(), ".gitignore");
        touch(dir.path(), "LICENSE");
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();

        assert_eq!(check(dir.path()).await.unwrap(), Verdict::Safe);
    }

    #[tokio::test]
    async fn unexpected_entries_are_conflicts() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "README.md");
        touch(dir.path(), "index.js");
        std::fs::create_dir(dir.path().join("src")).unwrap();

        match check(dir.path()).await.unwrap() {
            Verdict::Conflicts(entries) => {
                assert_eq!(
                    entries,
                    vec![
                        ConflictEntry { name: "index.js".to_string(), is_dir: false },
                        ConflictEntry { name: "src".to_string(), is_dir: true },
                    ]
                );
            }
            Verdict::Safe => panic!("expected conflicts"),
        }
    }

    #[tokio::test]
    async fn stale_logs_are_cleaned_not_reported() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "npm-debug.log");
        touch(dir.path(), "yarn-error.log.2024");
        touch(dir.path(), "yarn-debug.log");

        assert_eq!(check(dir.path()).await.unwrap(), Verdict::Safe);

        // Cleaned up as a side effect of the safe verdict
        assert!(!dir.path().join("npm-debug.log").exists());
        assert!(!dir.path().join("yarn-error.log.2024").exists());
        assert!(!dir.path().join("yarn-debug.log").exists());
    }

    #[tokio::test]
    async fn stale_logs_survive_when_conflicts_block() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "npm-debug.log");
        touch(dir.path(), "server.js");

        match check(dir.path()).await.unwrap() {
            Verdict::Conflicts(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].name, "server.js");
            }
            Verdict::Safe => panic!("expected conflicts"),
        }
        // Nothing was deleted on the conflict path
        assert!(dir.path().join("npm-debug.log").exists());
    }
}
