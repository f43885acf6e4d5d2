//! Error handling for autocodegen.
//! Defines the error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for autocodegen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in configuration documents or template settings
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in workspace layout or member discovery
    #[error("Workspace error: {0}.")]
    WorkspaceError(String),

    /// Represents failures of generator or renamer scripts, annotated
    /// with the failing script's path
    #[error("Script '{}' failed: {reason}.", script.display())]
    ScriptError { script: PathBuf, reason: String },

    /// Represents errors in processing .acgignore files
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),
}

/// Convenience type alias for Results with autocodegen's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("fatal: {}", err);
    std::process::exit(1);
}
