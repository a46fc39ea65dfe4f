//! Phase 3: Resetting the Managed Directories
//!
//! Empties every managed subdirectory of the destination root so nothing from
//! a previous installation survives. The directories themselves are kept, and
//! a missing one is created empty.
//!
//! This phase is destructive and has no undo. It runs only after both source
//! trees have been scanned successfully.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Execute Phase 3: empty each of `managed_dirs` under `destination`.
///
/// Returns the absolute paths of the directories that were reset, in the
/// order given.
pub fn execute(destination: &Path, managed_dirs: &[String]) -> Result<Vec<PathBuf>> {
    let mut reset = Vec::with_capacity(managed_dirs.len());

    for name in managed_dirs {
        let dir = destination.join(name);
        reset_dir(&dir)?;
        reset.push(dir);
    }

    Ok(reset)
}

fn reset_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Creating missing managed directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| Error::Filesystem {
                message: format!("Failed to create directory '{}': {}", dir.display(), e),
            })?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
        Ok(meta) if !meta.is_dir() => {
            return Err(Error::Filesystem {
                message: format!("Managed path '{}' is not a directory", dir.display()),
            });
        }
        Ok(_) => {}
    }

    let mut removed = 0usize;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // file_type() does not follow symlinks, so a link to a directory is
        // unlinked rather than emptied.
        let result = if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        result.map_err(|e| Error::Filesystem {
            message: format!("Failed to remove '{}': {}", path.display(), e),
        })?;
        removed += 1;
    }

    debug!("Reset {} ({} entries removed)", dir.display(), removed);
    Ok(())
}
