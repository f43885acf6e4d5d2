//! Rename pass: resolves deferred rename markers.

use crate::context::Context;
use crate::copier::copy_tree;
use crate::error::{Error, Result};
use crate::ext::{strip_suffix, ArtifactKind, RenameKind};
use crate::observer::PipelineObserver;
use crate::script::ScriptEngine;
use crate::sweep::paths_with_suffix;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves the destination for a rename marker.
///
/// A sibling renamer script, when present, decides the new name: its
/// trimmed stdout is resolved against the renamer's directory and the
/// script itself is consumed, never surviving into the target tree.
/// Without one the marker collapses to its suffix-stripped holder path.
fn resolve_destination(
    ctx: &Context,
    engine: &dyn ScriptEngine,
    marker_path: &Path,
    marker: ArtifactKind,
    renamer: ArtifactKind,
) -> Result<PathBuf> {
    let holder = strip_suffix(marker_path, marker.suffix());

    let renamer_path =
        PathBuf::from(format!("{}{}", holder.to_string_lossy(), renamer.suffix()));

    if renamer_path.is_file() {
        let output = engine.invoke(&renamer_path, ctx)?;
        let new_name = output.trim();
        if new_name.is_empty() {
            return Err(Error::ScriptError {
                script: renamer_path,
                reason: "renamer returned an empty name".to_string(),
            });
        }

        let dest = renamer_path.parent().unwrap_or(Path::new("")).join(new_name);
        fs::remove_file(&renamer_path)?;
        return Ok(dest);
    }

    Ok(holder)
}

/// Sweeps the target tree for rename markers of the given flavor and
/// moves each marked file or directory to its resolved destination.
///
/// Files are moved before directories: a directory due for rename may
/// itself contain pending file markers, and moving it first would pull
/// those paths out from under the sweep. Directory moves merge into an
/// existing destination via copy-then-remove, preserving symlinks.
pub fn process_renames(
    ctx: &Context,
    engine: &dyn ScriptEngine,
    kind: RenameKind,
    observer: &dyn PipelineObserver,
) -> Result<()> {
    let marker = kind.marker();
    let excluded = ctx.workspace_templates_roots();
    let markers =
        paths_with_suffix(&ctx.target_root, marker.suffix(), true, &excluded)?;

    let mut dir_moves: Vec<(PathBuf, PathBuf)> = Vec::new();

    for marker_path in markers {
        let dest =
            resolve_destination(ctx, engine, &marker_path, marker, kind.renamer())?;

        if marker_path.is_dir() {
            dir_moves.push((marker_path, dest));
        } else {
            fs::rename(&marker_path, &dest)?;
            observer.path_renamed(&marker_path, &dest);
        }
    }

    for (src, dest) in dir_moves {
        copy_tree(&src, &dest, &|_, _| false)?;
        fs::remove_dir_all(&src)?;
        observer.path_renamed(&src, &dest);
    }

    Ok(())
}
