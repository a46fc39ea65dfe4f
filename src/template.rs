//! Placeholder substitution for text files.
//!
//! Substitution works on raw bytes, one line at a time, so line endings and
//! any non-UTF-8 bytes outside the placeholder survive untouched.

use regex::bytes::{NoExpand, Regex};

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::filesystem::MemoryFS;

/// Replaces every occurrence of a literal placeholder with a fixed value.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Regex,
    replacement: Vec<u8>,
}

impl Substitution {
    /// Build a substitution of `placeholder` by `replacement`.
    pub fn new(placeholder: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&regex::escape(placeholder))?,
            replacement: replacement.as_bytes().to_vec(),
        })
    }

    /// Apply the substitution to every line of `content`.
    ///
    /// Returns `None` when the content holds no placeholder.
    pub fn apply(&self, content: &[u8]) -> Option<Vec<u8>> {
        if !self.pattern.is_match(content) {
            return None;
        }

        let mut out = Vec::with_capacity(content.len());
        for line in content.split_inclusive(|&b| b == b'\n') {
            out.extend_from_slice(&self.pattern.replace_all(line, NoExpand(self.replacement.as_slice())));
        }
        Some(out)
    }
}

/// Substitute the placeholder in every non-binary file of `fs`.
///
/// Binary/asset files, selected by extension, are left byte-for-byte intact.
/// Returns the number of files whose content changed.
pub fn substitute_tree(fs: &mut MemoryFS, config: &InstallerConfig, tenant: &str) -> Result<usize> {
    let substitution = Substitution::new(&config.placeholder, tenant)?;
    let mut changed = 0;

    for (path, file) in fs.files_mut() {
        if config.is_binary(path) {
            continue;
        }
        if let Some(content) = substitution.apply(&file.content) {
            file.content = content;
            changed += 1;
        }
    }

    Ok(changed)
}
