//! Implementation of the 4 phases of a tenant installation.
//!
//! ## Overview
//!
//! An installation follows 4 phases:
//! 1. Common Tree Processing - Scan the shared tree and substitute the placeholder
//! 2. Tenant Overlay Processing - Scan the tenant's tree and build the overlay log
//! 3. Reset - Empty the managed directories of the destination root
//! 4. Writing to Disk - Materialize common files overlaid by tenant files
//!
//! Phases 1 and 2 only read. Phases 3 and 4 mutate the destination and run
//! only once both source trees have been loaded, so a missing or unreadable
//! source leaves the destination untouched.

pub mod common;
pub mod orchestrator;
pub mod overlay;
pub mod reset;
pub mod write;

pub use common as phase1;
pub use overlay as phase2;
pub use reset as phase3;
pub use write as phase4;

use std::path::PathBuf;

use crate::filesystem::MemoryFS;

/// Something the installer did that belongs in the installation log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// A common file was processed (absolute source path).
    CommonFile(PathBuf),
    /// A tenant file will be overlaid (absolute source path).
    OverlayFile(PathBuf),
    /// A managed directory was emptied.
    ResetDir(PathBuf),
}

/// Compose the final tree: common files overlaid by tenant files.
pub fn compose(common: &MemoryFS, overlay: &MemoryFS) -> MemoryFS {
    let mut final_fs = common.clone();
    final_fs.merge(overlay);
    final_fs
}
