//! Generator pass: expands generator scripts into target files.

use crate::context::Context;
use crate::copier::copy_metadata;
use crate::error::{Error, Result};
use crate::ext::{strip_suffix, GenKind};
use crate::observer::PipelineObserver;
use crate::script::ScriptEngine;
use crate::sweep::paths_with_suffix;
use std::fs;
use std::path::Path;

/// Runs one generator script and writes its output verbatim to `target`.
///
/// Fragment generators reuse this contract from template-specific
/// composition points outside the default sweep.
pub fn generate_file(
    ctx: &Context,
    engine: &dyn ScriptEngine,
    script: &Path,
    target: &Path,
) -> Result<()> {
    let content = engine.invoke(script, ctx)?;

    fs::write(target, content).map_err(|e| Error::ScriptError {
        script: script.to_path_buf(),
        reason: format!("cannot write target '{}': {}", target.display(), e),
    })?;
    copy_metadata(script, target)?;

    Ok(())
}

/// Sweeps the target tree for generator scripts of the given flavor and
/// expands each into its suffix-stripped target.
///
/// Script failures are fatal and abort the run: a generator that cannot
/// be executed or that exits nonzero indicates a broken template set, not
/// a runtime condition. Processed sources are deleted after the sweep.
pub fn run_generators(
    ctx: &Context,
    engine: &dyn ScriptEngine,
    kind: GenKind,
    observer: &dyn PipelineObserver,
) -> Result<()> {
    let suffix = kind.artifact().suffix();
    let excluded = ctx.workspace_templates_roots();
    let scripts = paths_with_suffix(&ctx.target_root, suffix, false, &excluded)?;

    for script in &scripts {
        let target = strip_suffix(script, suffix);
        generate_file(ctx, engine, script, &target)?;
        observer.file_generated(&target);
    }

    for script in scripts {
        fs::remove_file(&script)?;
    }

    Ok(())
}
