//! Expansion pass: renders parametric templates in place.

use crate::context::Context;
use crate::copier::copy_metadata;
use crate::error::Result;
use crate::ext::{strip_suffix, TEMPLATE_EXT};
use crate::observer::PipelineObserver;
use crate::renderer::TemplateRenderer;
use crate::sweep::paths_with_suffix;
use std::fs;
use std::path::Path;

fn expand_one(
    renderer: &dyn TemplateRenderer,
    ctx: &Context,
    in_path: &Path,
    out_path: &Path,
) -> Result<()> {
    let source = fs::read_to_string(in_path)?;
    let rendered = renderer.render(&source, &ctx.render_params())?;
    fs::write(out_path, rendered)?;
    copy_metadata(in_path, out_path)?;
    Ok(())
}

/// Sweeps the target tree for parametric template files and renders each
/// to the same path with the template suffix stripped.
///
/// Per-file failures are reported through the observer and the sweep
/// continues; each file is independent and partial progress beats an
/// all-or-nothing sweep. Only sources that rendered successfully are
/// deleted, so a failed template stays behind for inspection.
pub fn expand_templates(
    ctx: &Context,
    renderer: &dyn TemplateRenderer,
    observer: &dyn PipelineObserver,
) -> Result<()> {
    let excluded = ctx.workspace_templates_roots();
    let sources =
        paths_with_suffix(&ctx.target_root, TEMPLATE_EXT, false, &excluded)?;

    let mut expanded = Vec::new();

    for in_path in &sources {
        let out_path = strip_suffix(in_path, TEMPLATE_EXT);
        match expand_one(renderer, ctx, in_path, &out_path) {
            Ok(()) => {
                observer.file_expanded(&out_path);
                expanded.push(in_path.clone());
            }
            Err(err) => observer.expand_failed(in_path, &err),
        }
    }

    for in_path in expanded {
        fs::remove_file(&in_path)?;
    }

    Ok(())
}
