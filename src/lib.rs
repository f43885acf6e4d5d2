//! autocodegen is a template-driven generator for project trees.
//! It materializes named templates (bootstrap trees, parametric template
//! files, generator scripts and rename markers) into one or more target
//! projects, and can safely re-run against an already generated workspace.

/// Command-line interface for the acg binary
pub mod cli;

/// Project, workspace and template configuration
/// Loaded from acg/config.toml merged with directory-derived defaults
pub mod config;

/// Common constants used throughout autocodegen
pub mod constants;

/// Immutable per-run generation context
pub mod context;

/// Recursive merge copying of bootstrap trees
pub mod copier;

/// Self-defense checks protecting template sources from generation
pub mod defense;

/// Error types and handling for autocodegen
pub mod error;

/// Expansion pass: renders parametric templates in place
pub mod expand;

/// Suffix classification of pipeline artifacts
pub mod ext;

/// Generator pass: expands generator scripts into target files
pub mod generator;

/// Per-template ignore patterns
/// Processes .acgignore files to exclude bootstrap entries from the copy
pub mod ignore;

/// Pipeline progress reporting at well-defined checkpoints
pub mod observer;

/// Phase orchestration for (project, template) runs
pub mod pipeline;

/// Rename pass: resolves deferred rename markers
pub mod rename;

/// Parametric template rendering via MiniJinja
pub mod renderer;

/// Generator and renamer script invocation
pub mod script;

/// Extension-driven sweeps over the target tree
pub mod sweep;

/// Workspace discovery and configuration composition
pub mod workspace;
