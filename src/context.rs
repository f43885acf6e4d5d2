//! Immutable per-run generation context.

use crate::config::{ProjectConfig, TemplateSettings};
use std::path::{Path, PathBuf};

/// Context for one (project, template) generation run.
///
/// Created once per template and read-only thereafter. Generator and
/// renamer scripts receive it serialized as JSON on stdin; any
/// non-determinism a script introduces is the script's responsibility.
#[derive(Debug)]
pub struct Context<'a> {
    pub template_name: &'a str,
    pub template_config: &'a TemplateSettings,
    pub project_config: &'a ProjectConfig,
    /// Every project configuration in the workspace, top project first.
    pub workspace_configs: &'a [ProjectConfig],
    pub target_root: PathBuf,
}

impl Context<'_> {
    /// Templates roots of every project in the workspace.
    ///
    /// The sweeps and the cache cleanup never descend into any of these;
    /// a member's templates root routinely lies inside another project's
    /// target tree.
    pub fn workspace_templates_roots(&self) -> Vec<&Path> {
        self.workspace_configs
            .iter()
            .map(|config| config.autocodegen.templates_root.as_path())
            .collect()
    }

    /// JSON document handed to generator and renamer scripts.
    pub fn to_json(&self) -> serde_json::Value {
        let workspace_projects: Vec<&str> = self
            .workspace_configs
            .iter()
            .map(|config| config.autocodegen.project_name.as_str())
            .collect();

        serde_json::json!({
            "template_name": self.template_name,
            "project_name": self.project_config.autocodegen.project_name,
            "project_root": self.project_config.autocodegen.project_root,
            "templates_root": self.project_config.autocodegen.templates_root,
            "target_root": self.target_root,
            "target_dir": self.template_config.target_dir,
            "init": self.template_config.init,
            "self_defence": self.template_config.self_defence,
            "workspace_projects": workspace_projects,
        })
    }

    /// Parameter mapping fed to parametric template rendering.
    pub fn render_params(&self) -> serde_json::Value {
        serde_json::json!({
            "project_name": self.project_config.autocodegen.project_name,
        })
    }
}
