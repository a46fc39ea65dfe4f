//! Orchestrator for a complete installation
//!
//! This module coordinates all phases to provide a single entry point for
//! installing one tenant into a destination root.

use std::path::{Path, PathBuf};

use log::info;

use super::{compose, phase1, phase2, phase3, phase4, Progress};
use crate::config::InstallerConfig;
use crate::error::{Error, Result};
use crate::filesystem::MemoryFS;
use crate::tenant::Tenant;

/// Options that change how an installation runs, not what it installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Scan and render everything but leave the destination untouched.
    pub dry_run: bool,
}

/// Summary of a finished installation.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub tenant: Tenant,
    /// Absolute destination root.
    pub destination: PathBuf,
    /// Number of files taken from the common tree.
    pub common_files: usize,
    /// Number of common files that contained the placeholder.
    pub substituted: usize,
    /// Number of files taken from the tenant tree.
    pub overlay_files: usize,
    /// Managed directories that were emptied (none on a dry run).
    pub reset_dirs: Vec<PathBuf>,
    /// The tree that was (or, on a dry run, would have been) written.
    pub final_fs: MemoryFS,
    pub dry_run: bool,
}

/// Execute a complete installation (Phases 1-4)
///
/// 1. Render the common tree for `tenant`
/// 2. Load the tenant overlay
/// 3. Reset the managed directories
/// 4. Write common files overlaid by tenant files
///
/// Relative paths in `config` are resolved against `working_dir`. Phases 3
/// and 4 are skipped when `options.dry_run` is set. `progress` receives every
/// installation log event in order.
pub fn install(
    config: &InstallerConfig,
    tenant: &Tenant,
    working_dir: &Path,
    options: InstallOptions,
    progress: &mut dyn FnMut(&Progress),
) -> Result<InstallReport> {
    let common_root = source_root("Common", &working_dir.join(config.common_tree()))?;
    let tenant_root = source_root("Tenant", &working_dir.join(config.tenant_tree(tenant.as_str())))?;
    let destination = working_dir.join(&config.destination);

    info!(
        "Installing {} from {} into {}",
        tenant,
        tenant_root.display(),
        destination.display()
    );

    // Phase 1: Common Tree Processing
    let common = phase1::execute(&common_root, config, tenant)?;
    for path in &common.trace {
        progress(&Progress::CommonFile(path.clone()));
    }

    // Phase 2: Tenant Overlay Processing
    let overlay = phase2::execute(&tenant_root, config)?;
    for path in &overlay.trace {
        progress(&Progress::OverlayFile(path.clone()));
    }

    let final_fs = compose(&common.fs, &overlay.fs);

    let mut reset_dirs = Vec::new();
    if options.dry_run {
        info!("Dry run: skipping reset and write of {}", destination.display());
    } else {
        // Phase 3: Reset
        reset_dirs = phase3::execute(&destination, &config.managed_dirs)?;
        for dir in &reset_dirs {
            progress(&Progress::ResetDir(dir.clone()));
        }

        // Phase 4: Write to Disk
        phase4::execute(&final_fs, &destination)?;
    }

    Ok(InstallReport {
        tenant: tenant.clone(),
        destination,
        common_files: common.fs.len(),
        substituted: common.substituted,
        overlay_files: overlay.fs.len(),
        reset_dirs,
        final_fs,
        dry_run: options.dry_run,
    })
}

/// Canonicalize a source tree root, failing if it is not a directory.
fn source_root(role: &str, path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(Error::SourceTree {
            role: role.to_string(),
            path: path.to_path_buf(),
        });
    }
    Ok(path.canonicalize()?)
}
