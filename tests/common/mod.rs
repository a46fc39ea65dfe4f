//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture that lays out a portal destination root,
//! a common tree and per-tenant trees in a temporary directory.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new()
//!         .with_common("config/app.txt", "Welcome to #TENANT#");
//!     fixture.command().arg("pahma").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::MANAGED_DIRS;
    pub use super::TestFixture;
}

/// The managed directories of the default configuration.
pub const MANAGED_DIRS: [&str; 5] = ["app", "config", "lib", "public", "spec"];

/// A temporary working directory with the default portal layout.
///
/// `portal/` holds the five managed directories, `ucb_extras/common` the
/// common tree, and `ucb_extras/<tenant>` an empty tree for each default
/// tenant.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create the layout with empty trees.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        for dir in MANAGED_DIRS {
            temp_dir
                .child("portal")
                .child(dir)
                .create_dir_all()
                .expect("Failed to create managed directory");
        }
        for tree in ["common", "bampfa", "cinefiles", "pahma"] {
            temp_dir
                .child("ucb_extras")
                .child(tree)
                .create_dir_all()
                .expect("Failed to create source tree");
        }
        Self { temp_dir }
    }

    /// Add a text file to the common tree.
    pub fn with_common(self, path: &str, content: &str) -> Self {
        self.source("common", path).write_str(content).expect("Failed to write file");
        self
    }

    /// Add a binary file to the common tree.
    #[allow(dead_code)]
    pub fn with_common_binary(self, path: &str, content: &[u8]) -> Self {
        self.source("common", path)
            .write_binary(content)
            .expect("Failed to write binary file");
        self
    }

    /// Add a file to one tenant's tree.
    #[allow(dead_code)]
    pub fn with_tenant_file(self, tenant: &str, path: &str, content: &str) -> Self {
        self.source(tenant, path).write_str(content).expect("Failed to write file");
        self
    }

    /// Add a file that already sits in the destination root.
    #[allow(dead_code)]
    pub fn with_installed(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child("portal")
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add a `.tenant-installer.yaml` configuration file.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child(".tenant-installer.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    fn source(&self, tree: &str, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child("ucb_extras").child(tree).child(path)
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of a file under the destination root.
    #[allow(dead_code)]
    pub fn installed(&self, path: &str) -> PathBuf {
        self.temp_dir.path().join("portal").join(path)
    }

    /// Every file under the destination root, relative and sorted.
    #[allow(dead_code)]
    pub fn installed_files(&self) -> Vec<String> {
        let root = self.temp_dir.path().join("portal");
        let mut files: Vec<String> = walkdir::WalkDir::new(&root)
            .into_iter()
            .map(|entry| entry.expect("Failed to walk destination root"))
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                entry
                    .path()
                    .strip_prefix(&root)
                    .expect("walked path under root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    /// A command for the installer binary running in the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("tenant-installer");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("TENANT_INSTALLER_CONFIG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
