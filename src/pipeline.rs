//! Phase orchestration for (project, template) runs.
//!
//! Each run is strictly sequential: bootstrap copy, expansion, one-shot
//! passes when initializing, renewable passes, cache cleanup. No state
//! survives a run beyond the target tree itself; re-running is the
//! recovery path after a partial failure.

use crate::config::{ProjectConfig, TemplateSettings};
use crate::constants::{BOOTSTRAP_DIR, CACHE_DIRS, IGNORE_FILE};
use crate::context::Context;
use crate::copier::copy_tree;
use crate::defense::is_workspace_protected;
use crate::error::{Error, Result};
use crate::expand::expand_templates;
use crate::ext::{ArtifactKind, GenKind, RenameKind};
use crate::generator::run_generators;
use crate::ignore::read_ignore_file;
use crate::observer::PipelineObserver;
use crate::rename::process_renames;
use crate::renderer::TemplateRenderer;
use crate::script::ScriptEngine;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Drives the generation passes for the templates of a workspace.
pub struct Pipeline<'a> {
    renderer: &'a dyn TemplateRenderer,
    scripts: &'a dyn ScriptEngine,
    observer: &'a dyn PipelineObserver,
    /// Forces every template run to be an initializing run; set from the
    /// CLI flag or the workspace configuration.
    force_init: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        scripts: &'a dyn ScriptEngine,
        observer: &'a dyn PipelineObserver,
        force_init: bool,
    ) -> Self {
        Self { renderer, scripts, observer, force_init }
    }

    /// Runs the full pass sequence for one template of one project.
    ///
    /// A template without a `bootstrap` directory is a no-op, not an
    /// error.
    pub fn generate(
        &self,
        template_name: &str,
        template_config: &TemplateSettings,
        project_config: &ProjectConfig,
        workspace_configs: &[ProjectConfig],
    ) -> Result<()> {
        let templates_root = &project_config.autocodegen.templates_root;
        let template_path = templates_root.join(template_name);
        let bootstrap_path = template_path.join(BOOTSTRAP_DIR);

        if !bootstrap_path.exists() {
            return Ok(());
        }

        let target_root =
            project_config.autocodegen.project_root.join(&template_config.target_dir);

        // Decided before the copy populates the target: a fresh target
        // always gets its one-shot artifacts.
        let init = self.force_init
            || template_config.init
            || is_fresh_target(&target_root, workspace_configs);

        let ctx = Context {
            template_name,
            template_config,
            project_config,
            workspace_configs,
            target_root: target_root.clone(),
        };

        let ignored = read_ignore_file(template_path.join(IGNORE_FILE))?;

        self.observer.copy_started(&bootstrap_path, &target_root);

        let exclude = |dir: &Path, name: &str| -> bool {
            let src_path = dir.join(name);
            let rel = match src_path.strip_prefix(&bootstrap_path) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => return false,
            };

            if ignored.is_match(&rel) {
                return true;
            }

            let dst_path = target_root.join(&rel);
            if is_workspace_protected(workspace_configs, &dst_path) {
                self.observer.path_defended(&dst_path);
                return true;
            }

            // One-shot sources must not reappear once the project has
            // passed its init window. Directories carrying such a name
            // are still copied.
            if !init && !src_path.is_dir() {
                if let Some(kind) = ArtifactKind::classify(name) {
                    if kind.is_init_only() {
                        return true;
                    }
                }
            }

            false
        };

        copy_tree(&bootstrap_path, &target_root, &exclude)?;

        expand_templates(&ctx, self.renderer, self.observer)?;

        if init {
            run_generators(&ctx, self.scripts, GenKind::InitOnly, self.observer)?;
            process_renames(&ctx, self.scripts, RenameKind::InitOnly, self.observer)?;
        }

        run_generators(&ctx, self.scripts, GenKind::Renewable, self.observer)?;
        process_renames(&ctx, self.scripts, RenameKind::Renewable, self.observer)?;

        cleanup_cache_dirs(&target_root, &ctx.workspace_templates_roots())?;

        Ok(())
    }
}

/// A target is fresh when it is missing, empty, or contains nothing but
/// the templates roots of the workspace itself.
fn is_fresh_target(target_root: &Path, workspace_configs: &[ProjectConfig]) -> bool {
    let entries = match fs::read_dir(target_root) {
        Ok(entries) => entries,
        Err(_) => return true,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let known = workspace_configs
            .iter()
            .any(|config| config.autocodegen.templates_root == path);
        if !known {
            return false;
        }
    }

    true
}

fn cache_dir_matcher() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for name in CACHE_DIRS {
        builder.add(
            Glob::new(name)
                .map_err(|e| Error::IgnoreError(format!("cache pattern: {}", e)))?,
        );
    }
    builder.build().map_err(|e| Error::IgnoreError(format!("cache pattern: {}", e)))
}

/// Schedules removal of interpreter cache directories under the target.
///
/// Fire-and-forget: the thread is detached and its outcome never
/// observed. The directories are disposable artifacts of generator
/// scripts and their loss is never worth failing a run over.
fn cleanup_cache_dirs(target_root: &Path, excluded_roots: &[&Path]) -> Result<()> {
    let matcher = cache_dir_matcher()?;

    let cache_dirs: Vec<PathBuf> = WalkDir::new(target_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            !excluded_roots.iter().any(|root| entry.path().starts_with(root))
        })
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            entry.file_type().is_dir() && matcher.is_match(entry.file_name())
        })
        .map(|entry| entry.path().to_path_buf())
        .collect();

    if cache_dirs.is_empty() {
        return Ok(());
    }

    std::thread::spawn(move || {
        for dir in cache_dirs {
            let _ = fs::remove_dir_all(&dir);
        }
    });

    Ok(())
}
