//! Phase 2: Tenant Overlay Processing
//!
//! Loads the tenant's own tree, which is installed verbatim on top of the
//! rendered common tree. Every file is copied; the overlay log pattern only
//! decides which files are announced in the installation log.
//!
//! Enumeration and logging are separate steps: [`execute`] enumerates the
//! files to copy, and [`log_lines`] derives the log from that enumeration.

use std::path::{Path, PathBuf};

use log::debug;
use regex::Regex;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::filesystem::MemoryFS;

/// Output of Phase 2.
#[derive(Debug, Clone)]
pub struct OverlayStage {
    /// Tenant files, keyed by relative path. Content is not substituted.
    pub fs: MemoryFS,
    /// Absolute source paths announced in the installation log.
    pub trace: Vec<PathBuf>,
}

/// Execute Phase 2 for the tenant tree rooted at `tenant_root`.
pub fn execute(tenant_root: &Path, config: &InstallerConfig) -> Result<OverlayStage> {
    let fs = MemoryFS::load_dir(tenant_root)?;
    let pattern = config.log_pattern()?;
    let trace = log_lines(&fs, tenant_root, &pattern);

    debug!(
        "Loaded {} overlay files from {} ({} logged)",
        fs.len(),
        tenant_root.display(),
        trace.len()
    );

    Ok(OverlayStage { fs, trace })
}

/// Absolute paths of the files in `fs` whose name looks like a filename.
///
/// The returned list never influences what is copied.
pub fn log_lines(fs: &MemoryFS, root: &Path, pattern: &Regex) -> Vec<PathBuf> {
    fs.files()
        .filter(|(path, _)| looks_like_file(path, pattern))
        .map(|(path, _)| root.join(path))
        .collect()
}

/// Whether the final component of `path` matches `pattern`.
pub fn looks_like_file(path: &Path, pattern: &Regex) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| pattern.is_match(name))
        .unwrap_or(false)
}
