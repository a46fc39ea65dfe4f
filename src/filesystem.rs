//! In-memory file tree used to stage an installation
//!
//! Source trees are scanned into a [`MemoryFS`], transformed (placeholder
//! substitution, overlay merge) without touching disk, and only then
//! materialized under the destination root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};

/// Represents a file with content and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// File content as bytes
    pub content: Vec<u8>,
    /// File permissions (simplified as u32)
    pub permissions: u32,
}

impl File {
    /// Create a new file with content
    pub fn new(content: Vec<u8>) -> Self {
        Self {
            content,
            permissions: 0o644, // Default permissions
        }
    }

    /// Create a new file from string content
    pub fn from_string(content: &str) -> Self {
        Self::new(content.as_bytes().to_vec())
    }
}

/// In-memory file tree keyed by path relative to its root.
///
/// Iteration is always in lexicographic path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryFS {
    files: BTreeMap<PathBuf, File>,
}

impl MemoryFS {
    /// Create a new empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every regular file under `root` into a new tree.
    ///
    /// Directories contribute only through the files they contain. Symlinks
    /// are followed so a linked asset is installed as a plain file.
    pub fn load_dir(root: &Path) -> Result<Self> {
        let mut fs = MemoryFS::new();

        for entry in walkdir::WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| Error::Filesystem {
                message: format!("Failed to walk '{}': {}", root.display(), e),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_path = entry.path();
            let relative_path = file_path.strip_prefix(root).map_err(|_| Error::Path {
                message: format!("Failed to make path relative: {}", file_path.display()),
            })?;

            let content = std::fs::read(file_path)?;
            let mut file = File::new(content);

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let metadata = entry.metadata().map_err(|e| Error::Filesystem {
                    message: format!("Failed to stat '{}': {}", file_path.display(), e),
                })?;
                file.permissions = metadata.permissions().mode() & 0o777;
            }

            fs.add_file(relative_path, file)?;
        }

        debug!("Loaded {} files from {}", fs.len(), root.display());
        Ok(fs)
    }

    /// Add or update a file
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, file: File) -> Result<()> {
        let path = path.as_ref().to_path_buf();
        if path.as_os_str().is_empty() || path.is_absolute() {
            return Err(Error::Path {
                message: format!("Expected a relative file path, got '{}'", path.display()),
            });
        }
        self.files.insert(path, file);
        Ok(())
    }

    /// Add a file with content
    pub fn add_file_content<P: AsRef<Path>>(&mut self, path: P, content: Vec<u8>) -> Result<()> {
        self.add_file(path, File::new(content))
    }

    /// Add a file with string content
    pub fn add_file_string<P: AsRef<Path>>(&mut self, path: P, content: &str) -> Result<()> {
        self.add_file(path, File::from_string(content))
    }

    /// Get a file by path
    pub fn get_file<P: AsRef<Path>>(&self, path: P) -> Option<&File> {
        self.files.get(path.as_ref())
    }

    /// Check if a file exists
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.files.contains_key(path.as_ref())
    }

    /// List all files in path order
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.files.keys().cloned().collect()
    }

    /// Get the number of files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if filesystem is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another filesystem into this one (last-write-wins)
    pub fn merge(&mut self, other: &MemoryFS) {
        for (path, file) in &other.files {
            self.files.insert(path.clone(), file.clone());
        }
    }

    /// Iterate over all files as (path, file) pairs in path order
    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &File)> {
        self.files.iter()
    }

    /// Iterate mutably over all files in path order
    pub fn files_mut(&mut self) -> impl Iterator<Item = (&PathBuf, &mut File)> {
        self.files.iter_mut()
    }
}
