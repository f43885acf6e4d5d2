//! Extension-driven sweeps over the target tree.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every path under `target_root` whose file name carries
/// `suffix`, skipping anything inside the excluded roots (the templates
/// roots of every workspace project).
///
/// Directories are only reported when `with_dirs` is set; the rename pass
/// is the one caller that sweeps directories.
pub fn paths_with_suffix(
    target_root: &Path,
    suffix: &str,
    with_dirs: bool,
    excluded_roots: &[&Path],
) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    let walker = WalkDir::new(target_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            !excluded_roots.iter().any(|root| entry.path().starts_with(root))
        });

    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.path() == target_root {
            continue;
        }
        if entry.file_type().is_dir() && !with_dirs {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            found.push(entry.path().to_path_buf());
        }
    }

    Ok(found)
}
