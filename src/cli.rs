//! CLI argument parsing and dispatch

use anyhow::Result;
use clap::Parser;

use crate::commands;
use tenant_installer::output::OutputConfig;

/// Tenant Installer - Install a tenant's files into the shared portal directory
#[derive(Parser, Debug)]
#[command(name = "tenant-installer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    install: commands::install::InstallArgs,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // RUST_LOG, when set, takes precedence over --log-level
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .format_timestamp(None)
        .init();

        let output = OutputConfig::from_env_and_flag(&self.color);
        commands::install::execute(self.install, &output)
    }
}
