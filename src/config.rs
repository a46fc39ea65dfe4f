//! # Installer Configuration
//!
//! This module defines [`InstallerConfig`], the single structure holding every
//! constant an installation depends on: the tenant allow-list, the managed
//! destination directories, the placeholder token, the binary/asset extension
//! set, the overlay log pattern, and where the source and destination trees
//! live.
//!
//! ## Defaults
//!
//! `InstallerConfig::default()` reproduces the classic portal layout:
//!
//! - tenants `bampfa`, `cinefiles`, `pahma`
//! - managed directories `app`, `config`, `lib`, `public`, `spec` under `portal`
//! - common tree `ucb_extras/common`, tenant trees `ucb_extras/<tenant>`
//! - placeholder `#TENANT#`
//! - binary extensions `jpg`, `png`, `py`, `svg`, `ttf`
//!
//! ## Configuration File
//!
//! A `.tenant-installer.yaml` file may override any subset of fields:
//!
//! ```yaml
//! tenants: [bampfa, cinefiles, pahma, ucjeps]
//! managed_dirs: [app, config, lib, public, spec, vendor]
//! placeholder: "@@TENANT@@"
//! ```
//!
//! Relative paths in the file resolve against the working directory the
//! installer runs from, not against the file's location.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".tenant-installer.yaml";

/// Everything an installation run needs to know besides the tenant itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Allow-list of tenant identifiers.
    pub tenants: Vec<String>,
    /// Subdirectories of the destination root that are emptied before install.
    pub managed_dirs: Vec<String>,
    /// Literal token replaced by the tenant identifier in text files.
    pub placeholder: String,
    /// Extensions (without the dot) copied verbatim, never substituted.
    pub binary_extensions: Vec<String>,
    /// Names in the tenant tree matching this pattern are logged during overlay.
    pub overlay_log_pattern: String,
    /// Destination root holding the managed directories.
    pub destination: PathBuf,
    /// Directory containing the common tree and one tree per tenant.
    pub source_root: PathBuf,
    /// Name of the common tree under `source_root`.
    pub common_dir: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            tenants: strings(&["bampfa", "cinefiles", "pahma"]),
            managed_dirs: strings(&["app", "config", "lib", "public", "spec"]),
            placeholder: "#TENANT#".to_string(),
            binary_extensions: strings(&["jpg", "png", "py", "svg", "ttf"]),
            overlay_log_pattern: r"^\w+\.\w+(\.\w+)?".to_string(),
            destination: PathBuf::from("portal"),
            source_root: PathBuf::from("ucb_extras"),
            common_dir: "common".to_string(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl InstallerConfig {
    /// Parse a configuration from YAML.
    ///
    /// An empty document (or one holding only comments) yields the defaults.
    /// The result is validated before it is returned.
    pub fn parse(yaml_content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml_content).map_err(parse_error)?;
        let config = if value.is_null() {
            Self::default()
        } else {
            serde_yaml::from_value(value).map_err(parse_error)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a YAML file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(Error::Io)?;
        Self::parse(&content)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE_NAME`] in
    /// `working_dir` is used when present, and the defaults otherwise.
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        let candidate = working_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!("Loading configuration from {}", candidate.display());
            Self::from_file(&candidate)
        } else {
            debug!("No {} found, using built-in defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Check that the configuration describes a usable installation.
    pub fn validate(&self) -> Result<()> {
        if self.tenants.is_empty() {
            return Err(invalid("tenant list is empty"));
        }

        let mut seen = HashSet::new();
        for tenant in &self.tenants {
            if !is_single_component(tenant) {
                return Err(invalid(format!(
                    "tenant '{}' must be a plain directory name",
                    tenant
                )));
            }
            if !seen.insert(tenant.as_str()) {
                return Err(invalid(format!("tenant '{}' is listed twice", tenant)));
            }
        }

        for dir in &self.managed_dirs {
            if !is_single_component(dir) {
                return Err(invalid(format!(
                    "managed directory '{}' must be a plain directory name",
                    dir
                )));
            }
        }

        if !is_single_component(&self.common_dir) {
            return Err(invalid(format!(
                "common directory '{}' must be a plain directory name",
                self.common_dir
            )));
        }

        if self.placeholder.is_empty() {
            return Err(invalid("placeholder is empty"));
        }
        if self.placeholder.contains('\n') {
            return Err(invalid("placeholder must not span lines"));
        }

        self.log_pattern()?;
        Ok(())
    }

    /// Root of the tree shared by every tenant.
    pub fn common_tree(&self) -> PathBuf {
        self.source_root.join(&self.common_dir)
    }

    /// Root of the overlay tree for one tenant.
    pub fn tenant_tree(&self, tenant: &str) -> PathBuf {
        self.source_root.join(tenant)
    }

    /// Whether a file is copied verbatim because of its extension.
    pub fn is_binary(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.binary_extensions.iter().any(|b| b == ext))
            .unwrap_or(false)
    }

    /// Compile the overlay log pattern.
    pub fn log_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&self.overlay_log_pattern)?)
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::ConfigValidation {
        message: message.into(),
    }
}

fn parse_error(e: serde_yaml::Error) -> Error {
    let message = e.to_string();
    let hint = if message.contains("unknown field") {
        Some(
            "valid fields are tenants, managed_dirs, placeholder, binary_extensions, \
             overlay_log_pattern, destination, source_root, common_dir"
                .to_string(),
        )
    } else {
        None
    };
    Error::ConfigParse { message, hint }
}

/// True for names like `app` or `pahma`: one normal component, no separators.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains('/')
        && !name.contains('\\')
}
