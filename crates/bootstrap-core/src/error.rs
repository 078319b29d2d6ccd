//! Typed error taxonomy for the bootstrap pipeline
//!
//! Every variant is pipeline-fatal: there is no retry and no rollback of
//! partially created files. The binary boundary maps these onto targeted
//! diagnostics and a non-zero exit code.

use crate::project::safety::ConflictEntry;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The derived app name violates package naming rules.
    /// Carries every violation so they can all be reported at once.
    #[error("cannot create a project named \"{name}\" because of npm naming restrictions")]
    InvalidName {
        name: String,
        violations: Vec<String>,
    },

    /// Requested template is neither registered nor a recognized archive URL.
    #[error("{requested} is not a valid template or a valid github download url")]
    UnknownTemplate {
        requested: String,
        available: Vec<String>,
    },

    /// The target directory holds entries the pipeline must not overwrite.
    #[error("the directory {} contains files that could conflict", directory.display())]
    DirectoryConflict {
        directory: PathBuf,
        entries: Vec<ConflictEntry>,
    },

    #[error("failed to download {url}")]
    Download {
        url: Url,
        #[source]
        source: DownloadError,
    },

    #[error("failed to extract {}", archive.display())]
    Extraction {
        archive: PathBuf,
        #[source]
        source: ExtractionError,
    },

    /// The executable could not be spawned at all. A non-zero exit from a
    /// successfully spawned child is not this error; callers get the status.
    #[error("failed to run `{command}`")]
    Subprocess {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dependency install exited with {status}")]
    InstallFailed { status: std::process::ExitStatus },

    #[error("invalid package metadata in {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// What went wrong while streaming an archive to disk.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Write(#[from] std::io::Error),
}

/// What went wrong while unpacking an archive.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error("entry `{0}` escapes the destination directory")]
    UnsafeEntry(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
