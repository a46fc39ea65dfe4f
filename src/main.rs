//! # Tenant Installer CLI
//!
//! This is the binary entry point for the `tenant-installer` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Running the installation for the requested tenant.
//! - Turning any library error into a diagnostic on stderr and a non-zero
//!   exit status.
//!
//! The installation logic lives in the `tenant_installer` library crate, so
//! the binary stays a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
