//! Pipeline progress reporting.
//!
//! Passes call into an observer at fixed checkpoints instead of printing
//! inline, keeping the pipeline itself free of output formatting.

use crate::error::Error;
use std::path::Path;

/// Checkpoints reported by the generation passes.
pub trait PipelineObserver {
    /// The bootstrap tree is about to be copied into the target root.
    fn copy_started(&self, _bootstrap: &Path, _target_root: &Path) {}

    /// A parametric template was rendered to its target path.
    fn file_expanded(&self, _target: &Path) {}

    /// A generator script's output was written to its target path.
    fn file_generated(&self, _target: &Path) {}

    /// A rename marker was resolved and moved.
    fn path_renamed(&self, _from: &Path, _to: &Path) {}

    /// A destination was excluded by the self-defense guard.
    fn path_defended(&self, _target: &Path) {}

    /// A non-fatal expansion failure; the sweep continues.
    fn expand_failed(&self, _source: &Path, _error: &Error) {}
}

/// Observer writing checkpoints through the `log` crate.
pub struct LogObserver;

impl PipelineObserver for LogObserver {
    fn copy_started(&self, bootstrap: &Path, target_root: &Path) {
        log::info!(
            "Copying bootstrap '{}' -> '{}'",
            bootstrap.display(),
            target_root.display()
        );
    }

    fn file_expanded(&self, target: &Path) {
        log::info!("Expanded '{}'", target.display());
    }

    fn file_generated(&self, target: &Path) {
        log::info!("Generated '{}'", target.display());
    }

    fn path_renamed(&self, from: &Path, to: &Path) {
        log::info!("Renamed '{}' -> '{}'", from.display(), to.display());
    }

    fn path_defended(&self, target: &Path) {
        log::debug!("Self-defense: skipping '{}'", target.display());
    }

    fn expand_failed(&self, source: &Path, error: &Error) {
        log::error!("Failed expanding '{}': {}", source.display(), error);
    }
}

/// Observer discarding every checkpoint.
pub struct NullObserver;

impl PipelineObserver for NullObserver {}
