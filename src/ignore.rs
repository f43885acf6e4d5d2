//! Per-template ignore pattern handling.
//! Processes a template's `.acgignore` file to exclude bootstrap entries
//! from the copy step, similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Reads a template's `.acgignore` into a set of glob patterns.
///
/// Patterns are matched against bootstrap-relative paths. Blank lines and
/// `#` comments are skipped; a missing file yields an empty set.
pub fn read_ignore_file<P: AsRef<Path>>(ignore_path: P) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    if let Ok(contents) = read_to_string(ignore_path.as_ref()) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!(".acgignore loading failed: {}", e))
            })?);
        }
    } else {
        debug!(".acgignore does not exist");
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!(".acgignore loading failed: {}", e)))
}
