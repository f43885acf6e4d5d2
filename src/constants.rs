//! Common constants used throughout autocodegen.

/// Name of the per-project templates directory.
pub const ACG_DIR: &str = "acg";

/// Project configuration file, relative to the templates root.
pub const CONFIG_FILE: &str = "config.toml";

/// Subdirectory of a template that is copied verbatim into the target.
pub const BOOTSTRAP_DIR: &str = "bootstrap";

/// Per-template ignore file excluding bootstrap entries from the copy.
pub const IGNORE_FILE: &str = ".acgignore";

/// Directory names treated as disposable interpreter caches.
pub const CACHE_DIRS: [&str; 2] = ["__pycache__", ".mypy_cache"];
