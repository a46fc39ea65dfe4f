//! # CLI Command Implementations
//!
//! The `tenant-installer` binary has a single command, installation. It keeps
//! the layout used for every command: an `Args` struct derived with `clap`
//! and an `execute` function that calls into the `tenant_installer` library.

pub mod install;
