//! Recursive merge copying of bootstrap trees.

use crate::error::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Copies `src` into `dst`, merging into an already existing destination.
///
/// Intermediate directories are created as needed and existing files are
/// overwritten. Symbolic links are recreated rather than followed;
/// unreadable links are skipped. The exclusion predicate receives the
/// source directory and entry name for every entry visited; returning
/// true excludes the entry and, for directories, everything below it.
pub fn copy_tree(src: &Path, dst: &Path, exclude: &dyn Fn(&Path, &str) -> bool) -> Result<()> {
    fs::create_dir_all(dst)?;

    let mut entries: Vec<fs::DirEntry> = fs::read_dir(src)?.collect::<io::Result<_>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name();

        if exclude(src, &name.to_string_lossy()) {
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(&name);
        let file_type = entry.file_type()?;

        if file_type.is_symlink() {
            copy_symlink(&src_path, &dst_path)?;
        } else if file_type.is_dir() {
            copy_tree(&src_path, &dst_path, exclude)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Carries the source file's mode bits and modification time onto `dst`.
/// Generated files keep the executable bit of the script or template
/// that produced them.
pub fn copy_metadata(src: &Path, dst: &Path) -> Result<()> {
    let metadata = fs::metadata(src)?;
    fs::set_permissions(dst, metadata.permissions())?;
    let mtime = filetime::FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dst, mtime)?;
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = match fs::read_link(src) {
        Ok(target) => target,
        Err(_) => return Ok(()),
    };
    if dst.symlink_metadata().is_ok() {
        fs::remove_file(dst)?;
    }
    std::os::unix::fs::symlink(target, dst)?;
    Ok(())
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    // Without symlink support the link target's content is copied; a
    // dangling link is skipped.
    if fs::metadata(src).is_ok() {
        fs::copy(src, dst)?;
    }
    Ok(())
}
