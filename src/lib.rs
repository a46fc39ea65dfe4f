//! # Tenant Installer Library
//!
//! This library installs a tenant (one of a fixed set of named client
//! configurations) into a shared application directory. It is designed to be
//! used by the `tenant-installer` command-line tool but can be driven directly
//! from other code or tests.
//!
//! ## Quick Example
//!
//! ```
//! use tenant_installer::config::InstallerConfig;
//! use tenant_installer::filesystem::MemoryFS;
//! use tenant_installer::{phases, template, tenant};
//!
//! let config = InstallerConfig::default();
//! let tenant = tenant::select(Some("cinefiles"), &config).unwrap();
//!
//! let mut common = MemoryFS::new();
//! common.add_file_string("config/app.txt", "Welcome to #TENANT#").unwrap();
//! template::substitute_tree(&mut common, &config, tenant.as_str()).unwrap();
//!
//! let mut overlay = MemoryFS::new();
//! overlay.add_file_string("app/helpers/application_helper.rb", "module ApplicationHelper; end").unwrap();
//!
//! let final_fs = phases::compose(&common, &overlay);
//! assert_eq!(
//!     final_fs.get_file("config/app.txt").unwrap().content,
//!     b"Welcome to cinefiles".to_vec()
//! );
//! assert_eq!(final_fs.len(), 2);
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: The tenant allow-list, managed directories,
//!   placeholder and source/destination layout, with defaults and an optional
//!   `.tenant-installer.yaml` override.
//! - **Tenant Selection (`tenant`)**: Validates the requested tenant against
//!   the allow-list before anything touches the disk.
//! - **In-Memory Filesystem (`filesystem`)**: Source trees are staged as
//!   path-to-content maps so substitution and precedence are pure operations.
//! - **Templating (`template`)**: Literal placeholder substitution for text
//!   files, skipping binary/asset extensions.
//! - **Phases (`phases`)**: The installation pipeline.
//!
//! ## Execution Flow
//!
//! The main entry point is `phases::orchestrator::install`, which executes:
//!
//! 1.  **Common**: Scan the common tree and substitute the placeholder.
//! 2.  **Overlay**: Scan the tenant tree and compute its log lines.
//! 3.  **Reset**: Empty the managed directories under the destination root.
//! 4.  **Write**: Write common files overlaid by tenant files.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod output;
pub mod phases;
pub mod template;
pub mod tenant;

#[cfg(test)]
mod template_proptest;
