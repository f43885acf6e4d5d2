//! Workspace discovery and configuration composition.

use crate::config::ProjectConfig;
use crate::constants::ACG_DIR;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Finds the topmost ancestor of `start` (including `start` itself)
/// containing an `acg` directory.
///
/// Returning the highest match lets a run started inside a workspace
/// member pick up the whole workspace.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .filter(|dir| dir.join(ACG_DIR).is_dir())
        .last()
        .map(Path::to_path_buf)
}

/// Collects the `acg` directory of the top project and of every declared
/// workspace member, in declaration order.
pub fn find_workspace_acg_dirs(
    project_root: &Path,
    config: &ProjectConfig,
) -> Result<Vec<PathBuf>> {
    let top = project_root.join(ACG_DIR);
    if !top.is_dir() {
        return Err(Error::WorkspaceError(format!(
            "missing top-level '{}' directory in project root: {}",
            ACG_DIR,
            project_root.display()
        )));
    }

    let mut acg_dirs = vec![top];

    if let Some(workspace) = &config.workspace {
        for member in &workspace.members {
            let acg_dir = project_root.join(member).join(ACG_DIR);
            if !acg_dir.is_dir() {
                return Err(Error::WorkspaceError(format!(
                    "missing '{}' directory in workspace member: {}",
                    ACG_DIR,
                    member.display()
                )));
            }
            acg_dirs.push(acg_dir);
        }
    }

    Ok(acg_dirs)
}

/// Loads the ordered list of workspace project configurations: the top
/// project first, then each member in declaration order. Members inherit
/// the top project's name as their default and may not declare nested
/// workspaces of their own.
pub fn load_workspace_configs(project_root: &Path) -> Result<Vec<ProjectConfig>> {
    let top_config = ProjectConfig::load(&project_root.join(ACG_DIR), None)?;
    let acg_dirs = find_workspace_acg_dirs(project_root, &top_config)?;

    let mut configs = vec![top_config];

    for acg_dir in &acg_dirs[1..] {
        let config =
            ProjectConfig::load(acg_dir, Some(&configs[0].autocodegen.project_name))?;
        if config.workspace.is_some() {
            return Err(Error::WorkspaceError(format!(
                "workspace project may not contain nested workspaces: {}",
                config.autocodegen.project_root.display()
            )));
        }
        configs.push(config);
    }

    Ok(configs)
}

/// Whether the workspace configuration forces initializing runs.
pub fn workspace_forces_init(configs: &[ProjectConfig]) -> bool {
    configs
        .first()
        .and_then(|config| config.workspace.as_ref())
        .map(|workspace| workspace.init)
        .unwrap_or(false)
}
