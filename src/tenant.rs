//! Tenant selection.
//!
//! Turns the raw command-line argument into a [`Tenant`] that is known to be
//! on the configured allow-list. Nothing else in the crate accepts a bare
//! string as a tenant, so an unvalidated name can never reach the filesystem.

use std::fmt;

use crate::config::InstallerConfig;
use crate::error::{Error, Result};

/// A tenant identifier that passed the allow-list check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tenant(String);

impl Tenant {
    /// The identifier as written in the allow-list.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tenant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tenant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate `arg` against the allow-list in `config`.
///
/// A missing or empty argument and any name outside the list produce
/// [`Error::InvalidTenant`], whose message enumerates the valid tenants.
pub fn select(arg: Option<&str>, config: &InstallerConfig) -> Result<Tenant> {
    match arg {
        Some(name) if config.tenants.iter().any(|t| t == name) => Ok(Tenant(name.to_string())),
        other => Err(Error::InvalidTenant {
            given: other.map(str::to_string),
            valid: config.tenants.clone(),
        }),
    }
}
