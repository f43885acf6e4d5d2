//! Self-defense checks protecting template sources from generation.
//!
//! Generation must never overwrite a template's own source tree, nor
//! another template's protection-enabled sources, even across workspace
//! members. The checks here are preventive filters consulted by the tree
//! copier and the one-shot passes; a protected path is excluded, never an
//! error.
//!
//! All comparisons are lexical on the canonicalized absolute paths the
//! configuration loader resolved at startup.

use crate::config::ProjectConfig;
use std::path::Path;

/// Whether `path` is protected by `config`'s template tree.
///
/// The templates root itself is never protected: copying must be able to
/// target its parent without the root acting as a write destination. A
/// path inside the templates root belongs to the immediate child template
/// directory that prefixes it, and that template's `self_defence` flag
/// decides; anything inside the templates root but outside every declared
/// template (the shared configuration file, for instance) is protected
/// unconditionally.
pub fn is_project_protected(config: &ProjectConfig, path: &Path) -> bool {
    let templates_root = config.autocodegen.templates_root.as_path();

    if path == templates_root {
        return false;
    }

    if !path.starts_with(templates_root) {
        return false;
    }

    for (template_name, template_config) in &config.templates {
        let template_path = templates_root.join(template_name);
        if path.starts_with(&template_path) {
            return template_config.self_defence;
        }
    }

    true
}

/// A path is protected when any project in the workspace claims it.
pub fn is_workspace_protected(configs: &[ProjectConfig], path: &Path) -> bool {
    configs.iter().any(|config| is_project_protected(config, path))
}
