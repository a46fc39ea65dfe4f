//! Phase 1: Common Tree Processing
//!
//! Loads the tree shared by every tenant and renders it for one tenant.
//!
//! ## Process
//!
//! 1.  **Scan**: Every regular file under the common root is loaded into a
//!     `MemoryFS`, keyed by its path relative to that root.
//!
//! 2.  **Trace**: The absolute source path of each file is recorded in
//!     lexicographic path order, forming the installation log.
//!
//! 3.  **Substitute**: Text files have every placeholder occurrence replaced
//!     by the tenant identifier. Files whose extension is in the binary/asset
//!     set are kept byte-for-byte.
//!
//! Nothing is written to disk here; the result is merged with the tenant
//! overlay and materialized by the write phase.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::filesystem::MemoryFS;
use crate::template;
use crate::tenant::Tenant;

/// Output of Phase 1.
#[derive(Debug, Clone)]
pub struct CommonStage {
    /// Rendered common files, keyed by relative path.
    pub fs: MemoryFS,
    /// Absolute source path of every file, in processing order.
    pub trace: Vec<PathBuf>,
    /// Number of files whose content contained the placeholder.
    pub substituted: usize,
}

/// Execute Phase 1 for the common tree rooted at `common_root`.
///
/// `common_root` is expected to be absolute so the trace lines are too.
pub fn execute(common_root: &Path, config: &InstallerConfig, tenant: &Tenant) -> Result<CommonStage> {
    let mut fs = MemoryFS::load_dir(common_root)?;
    let trace = fs.list_files().iter().map(|p| common_root.join(p)).collect();
    let substituted = template::substitute_tree(&mut fs, config, tenant.as_str())?;

    debug!(
        "Rendered {} common files for {} ({} with placeholders)",
        fs.len(),
        tenant,
        substituted
    );

    Ok(CommonStage {
        fs,
        trace,
        substituted,
    })
}
