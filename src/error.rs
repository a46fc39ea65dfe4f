//! # Error Handling
//!
//! This module defines the centralized error type for the `tenant-installer`
//! library. It uses the `thiserror` library to create an `Error` enum that
//! covers every anticipated failure mode of an installation run.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of everything that can go wrong, from an unknown
//!   tenant name to a failed write under the destination root.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! Only [`Error::InvalidTenant`] is an expected, user-facing failure: its
//! display text is the usage message. Everything else is a diagnostic for an
//! installation that could not complete.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for tenant installation
#[derive(Error, Debug)]
pub enum Error {
    /// The tenant argument was missing, empty, or not in the allow-list.
    ///
    /// Displays as the usage message listing every valid tenant.
    #[error("Please specify a valid tenant from this list: {}\nLike so: `tenant-installer TENANT`", valid.join(", "))]
    InvalidTenant {
        /// The rejected argument, `None` when no argument was given.
        given: Option<String>,
        /// The configured allow-list.
        valid: Vec<String>,
    },

    /// The installer configuration file could not be parsed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The configuration parsed but describes an unusable installation.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// A source tree (common or tenant) does not exist or is not a directory.
    #[error("{role} source tree not found: {}", path.display())]
    SourceTree { role: String, path: PathBuf },

    /// A filesystem operation under the destination root failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
