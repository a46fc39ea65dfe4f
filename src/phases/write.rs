//! Phase 4: Writing to Disk
//!
//! This is the final phase of an installation. It materializes the composed
//! file tree (common files overlaid by tenant files) under the destination
//! root.
//!
//! ## Process
//!
//! 1.  **Iterate Files**: Files are visited in lexicographic path order.
//!
//! 2.  **Create Directories**: Missing parent directories are created
//!     recursively.
//!
//! 3.  **Write Atomically**: Content goes to a uniquely named temporary file
//!     in the same directory, which then replaces the destination path in a
//!     single rename. No temporary file is left behind, and the temporary
//!     name never collides with another file of the tree.
//!
//! 4.  **Set Permissions**: On Unix-like systems, the mode captured from the
//!     source file is applied before the rename.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::filesystem::{File, MemoryFS};

/// Execute Phase 4: Write the final file tree under `output_path`.
pub fn execute(final_fs: &MemoryFS, output_path: &Path) -> Result<()> {
    for (relative_path, file) in final_fs.files() {
        let full_path = output_path.join(relative_path);
        let parent = full_path.parent().unwrap_or(output_path);

        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", parent.display(), e),
        })?;

        write_atomic(&full_path, parent, file)?;
    }

    debug!("Wrote {} files under {}", final_fs.len(), output_path.display());
    Ok(())
}

/// Write `file` to `path` through a temporary file created in `parent`.
///
/// The temporary file is removed when dropped, so every early return cleans
/// up after itself.
fn write_atomic(path: &Path, parent: &Path, file: &File) -> Result<()> {
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::Filesystem {
        message: format!("Failed to create temporary file in '{}': {}", parent.display(), e),
    })?;

    tmp.write_all(&file.content)
        .and_then(|()| tmp.flush())
        .map_err(|e| Error::Filesystem {
            message: format!("Failed to write file '{}': {}", path.display(), e),
        })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(file.permissions);
        fs::set_permissions(tmp.path(), perms).map_err(|e| Error::Filesystem {
            message: format!("Failed to set permissions on '{}': {}", path.display(), e),
        })?;
    }

    tmp.persist(path).map_err(|e| Error::Filesystem {
        message: format!("Failed to replace '{}': {}", path.display(), e.error),
    })?;

    Ok(())
}
