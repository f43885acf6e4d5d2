//! Project, workspace and template configuration.
//!
//! Configuration is read from `<acg>/config.toml` and merged with defaults
//! derived from the templates directory itself: every subdirectory of the
//! templates root that the document does not name becomes an implicit
//! template with default settings. The resulting [`ProjectConfig`] is
//! immutable for the remainder of the run.

use crate::constants::CONFIG_FILE;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Core project identification, resolved from the templates directory.
#[derive(Debug, Clone)]
pub struct ProjectSettings {
    pub project_name: String,
    /// Generation target; the parent of the templates root.
    pub project_root: PathBuf,
    pub templates_root: PathBuf,
}

/// Optional workspace membership declared by the top project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceSettings {
    /// Member project directories, relative to the workspace root.
    #[serde(default)]
    pub members: Vec<PathBuf>,

    /// Forces every run against this workspace to be an initializing run.
    #[serde(default)]
    pub init: bool,
}

/// Per-template generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSettings {
    /// Where this template's output lands, relative to the project root.
    #[serde(default)]
    pub target_dir: PathBuf,

    /// Whether one-shot artifacts are eligible for this template.
    #[serde(default = "default_true")]
    pub init: bool,

    /// Protects this template's sources from sibling template runs.
    #[serde(default = "default_true")]
    pub self_defence: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self { target_dir: PathBuf::new(), init: true, self_defence: true }
    }
}

fn default_true() -> bool {
    true
}

/// Raw `config.toml` document, before directory defaults are merged in.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    autocodegen: RawSettings,
    workspace: Option<WorkspaceSettings>,
    #[serde(default)]
    templates: IndexMap<String, TemplateSettings>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    project_name: Option<String>,
}

/// One project's validated configuration. Template order is preserved:
/// declared templates first, implicit ones appended in sorted order.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub autocodegen: ProjectSettings,
    pub workspace: Option<WorkspaceSettings>,
    pub templates: IndexMap<String, TemplateSettings>,
}

impl ProjectConfig {
    /// Loads the project configuration for the given templates directory.
    ///
    /// A missing `config.toml` is treated as an empty document. Paths are
    /// canonicalized here once so every later ownership comparison is a
    /// lexical check on resolved absolute paths.
    pub fn load(acg_dir: &Path, project_name_default: Option<&str>) -> Result<Self> {
        let templates_root = acg_dir.canonicalize().map_err(|e| {
            Error::ConfigError(format!(
                "cannot resolve templates root '{}': {}",
                acg_dir.display(),
                e
            ))
        })?;

        let config_path = templates_root.join(CONFIG_FILE);
        let raw: RawConfig = if config_path.is_file() {
            debug!("Loading configuration from {}", config_path.display());
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| {
                Error::ConfigError(format!("{}: {}", config_path.display(), e))
            })?
        } else {
            debug!("No {} in {}, using defaults", CONFIG_FILE, templates_root.display());
            RawConfig::default()
        };

        let project_root = templates_root
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                Error::ConfigError(format!(
                    "templates root '{}' has no parent directory",
                    templates_root.display()
                ))
            })?;

        let project_name = raw
            .autocodegen
            .project_name
            .or_else(|| project_name_default.map(str::to_string))
            .or_else(|| {
                project_root.file_name().map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "project".to_string());

        let mut templates = raw.templates;

        let mut implicit: Vec<String> = fs::read_dir(&templates_root)?
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        implicit.sort();

        for name in implicit {
            if !templates.contains_key(&name) {
                templates.insert(name, TemplateSettings::default());
            }
        }

        Ok(ProjectConfig {
            autocodegen: ProjectSettings { project_name, project_root, templates_root },
            workspace: raw.workspace,
            templates,
        })
    }
}
