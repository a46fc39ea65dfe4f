//! Install command implementation
//!
//! Runs the 4-phase installation pipeline for one tenant:
//! 1. Rendering the common tree
//! 2. Loading the tenant overlay
//! 3. Resetting the managed directories
//! 4. Writing to disk

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use tenant_installer::config::InstallerConfig;
use tenant_installer::output::{installed_line, OutputConfig};
use tenant_installer::phases::orchestrator::{self, InstallOptions, InstallReport};
use tenant_installer::phases::Progress;
use tenant_installer::tenant;

/// Arguments for the install command
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Tenant to install (for example bampfa, cinefiles or pahma)
    #[arg(value_name = "TENANT")]
    pub tenant: Option<String>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH", env = "TENANT_INSTALLER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Destination root holding the managed directories
    #[arg(long, value_name = "PATH")]
    pub dest: Option<PathBuf>,

    /// Directory containing the common tree and the tenant trees
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Show what would be installed without touching the destination
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress the per-file installation log
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the install command from the current directory
pub fn execute(args: InstallArgs, output: &OutputConfig) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    run(args, &working_dir, output).map(|_| ())
}

/// Resolve configuration and tenant, then install relative to `working_dir`.
fn run(args: InstallArgs, working_dir: &Path, output: &OutputConfig) -> Result<InstallReport> {
    let explicit = args.config.as_ref().map(|path| working_dir.join(path));
    let mut config = InstallerConfig::discover(explicit.as_deref(), working_dir)?;
    if let Some(dest) = args.dest {
        config.destination = dest;
    }
    if let Some(source) = args.source {
        config.source_root = source;
    }

    // Must fail before anything under the destination is touched
    let tenant = tenant::select(args.tenant.as_deref(), &config)?;

    let quiet = args.quiet;
    let report = orchestrator::install(
        &config,
        &tenant,
        working_dir,
        InstallOptions {
            dry_run: args.dry_run,
        },
        &mut |event: &Progress| match event {
            Progress::CommonFile(path) | Progress::OverlayFile(path) if !quiet => {
                println!("{}", path.display());
            }
            _ => {}
        },
    )?;

    println!();
    if report.dry_run {
        println!(
            "Dry run for {}: {} files would be written to {}",
            report.tenant,
            report.final_fs.len(),
            report.destination.display()
        );
    } else {
        println!("{}", installed_line(output, report.tenant.as_str()));
    }

    Ok(report)
}
