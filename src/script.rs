//! Generator and renamer script invocation.
//!
//! Scripts are ordinary executables shipped inside a template's bootstrap
//! tree. The pipeline depends only on the narrow [`ScriptEngine`]
//! contract: one context in, one string out.

use crate::context::Context;
use crate::error::{Error, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Trait for invoking generator and renamer scripts.
pub trait ScriptEngine {
    /// Invokes the script with the generation context, returning its
    /// output. A script that cannot be executed or that fails is a fatal
    /// error carrying the script's path.
    fn invoke(&self, script: &Path, ctx: &Context) -> Result<String>;
}

/// Runs scripts as child processes.
///
/// The context is serialized as JSON on the script's stdin, stdout is
/// captured verbatim as the result, and stderr is inherited so script
/// diagnostics reach the operator directly.
pub struct CommandScriptEngine;

impl CommandScriptEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandScriptEngine {
    fn default() -> Self {
        CommandScriptEngine::new()
    }
}

impl ScriptEngine for CommandScriptEngine {
    fn invoke(&self, script: &Path, ctx: &Context) -> Result<String> {
        let mut child = Command::new(script)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::ScriptError {
                script: script.to_path_buf(),
                reason: format!("cannot execute: {}", e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let payload = ctx.to_json().to_string();
            // A script that never reads its context closes stdin early.
            if let Err(err) = stdin.write_all(payload.as_bytes()) {
                if err.kind() != io::ErrorKind::BrokenPipe {
                    return Err(Error::IoError(err));
                }
            }
        }

        let output = child.wait_with_output().map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::ScriptError {
                script: script.to_path_buf(),
                reason: format!("exited with {}", output.status),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| Error::ScriptError {
            script: script.to_path_buf(),
            reason: "produced non-UTF-8 output".to_string(),
        })
    }
}
