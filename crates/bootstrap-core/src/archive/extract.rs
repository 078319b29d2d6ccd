//! Zip extraction with top-level wrapper stripping
//!
//! Template archives are published as `repo-branch/...`-wrapped zips, so
//! exactly one leading path segment is stripped from every entry and the
//! template's actual root lands directly inside the destination directory.
//! Entries that would escape the destination are rejected.

use crate::error::{Error, ExtractionError, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

/// Unpack `archive_path` into `dest`, stripping one leading path segment.
/// The archive file itself is left in place; the pipeline deletes it after
/// a successful extraction so a failure leaves it for diagnosis.
pub fn extract(archive_path: &Path, dest: &Path) -> Result<()> {
    unpack(archive_path, dest).map_err(|source| Error::Extraction {
        archive: archive_path.to_path_buf(),
        source,
    })
}

fn unpack(archive_path: &Path, dest: &Path) -> Result<(), ExtractionError> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        let entry_name = entry.name().to_string();
        let enclosed = entry
            .enclosed_name()
            .ok_or_else(|| ExtractionError::UnsafeEntry(entry_name.clone()))?;

        let Some(stripped) = strip_top_level(&enclosed) else {
            // The wrapper folder itself; nothing left after stripping.
            continue;
        };
        let target = dest.join(&stripped);

        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(mode))?;
        }
    }

    Ok(())
}

/// Drop the first path component; None when nothing remains.
fn strip_top_level(path: &Path) -> Option<PathBuf> {
    let mut components = path.components();
    components.next()?;
    let rest = components.as_path();
    if rest.as_os_str().is_empty() {
        None
    } else {
        Some(rest.to_path_buf())
    }
}
