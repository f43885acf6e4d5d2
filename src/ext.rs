//! Suffix classification of pipeline artifacts.
//!
//! Every artifact kind is a plain suffix overlaid on an ordinary file name;
//! stripping the suffix yields the eventual target path. Suffixes are chosen
//! so that no kind's suffix is a suffix of another, which keeps the
//! classification unambiguous: a name matches at most one kind.

use std::path::{Path, PathBuf};

/// Parametric template files rendered by the template engine.
pub const TEMPLATE_EXT: &str = ".j2";

/// Pipeline artifact kinds recognized by suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Renewable generator script, re-run on every invocation
    Gen,
    /// Init-only generator script, consumed on an initializing run
    GenOnce,
    /// Renewable rename marker
    Rename,
    /// Init-only rename marker
    RenameOnce,
    /// Renamer script paired with a renewable rename marker
    Renamer,
    /// Renamer script paired with an init-only rename marker
    RenamerOnce,
    /// Fragment generator, invoked from template-specific composition
    /// points rather than the default generator sweep
    Fragment,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::Gen,
        ArtifactKind::GenOnce,
        ArtifactKind::Rename,
        ArtifactKind::RenameOnce,
        ArtifactKind::Renamer,
        ArtifactKind::RenamerOnce,
        ArtifactKind::Fragment,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Gen => ".gen",
            ArtifactKind::GenOnce => ".gen1",
            ArtifactKind::Rename => ".rename",
            ArtifactKind::RenameOnce => ".ren1",
            ArtifactKind::Renamer => ".rename.run",
            ArtifactKind::RenamerOnce => ".ren1.run",
            ArtifactKind::Fragment => ".fra",
        }
    }

    /// Classifies a file name by its pipeline suffix.
    pub fn classify(name: &str) -> Option<ArtifactKind> {
        Self::ALL.into_iter().find(|kind| name.ends_with(kind.suffix()))
    }

    /// Whether this artifact is only eligible on an initializing run.
    pub fn is_init_only(self) -> bool {
        matches!(
            self,
            ArtifactKind::GenOnce | ArtifactKind::RenameOnce | ArtifactKind::RenamerOnce
        )
    }
}

/// Generator sweep flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenKind {
    Renewable,
    InitOnly,
}

impl GenKind {
    pub fn artifact(self) -> ArtifactKind {
        match self {
            GenKind::Renewable => ArtifactKind::Gen,
            GenKind::InitOnly => ArtifactKind::GenOnce,
        }
    }
}

/// Rename sweep flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameKind {
    Renewable,
    InitOnly,
}

impl RenameKind {
    pub fn marker(self) -> ArtifactKind {
        match self {
            RenameKind::Renewable => ArtifactKind::Rename,
            RenameKind::InitOnly => ArtifactKind::RenameOnce,
        }
    }

    pub fn renamer(self) -> ArtifactKind {
        match self {
            RenameKind::Renewable => ArtifactKind::Renamer,
            RenameKind::InitOnly => ArtifactKind::RenamerOnce,
        }
    }
}

/// Strips a pipeline suffix from a path, yielding the target path.
/// Returns the path unchanged when the suffix is not present.
pub fn strip_suffix(path: &Path, suffix: &str) -> PathBuf {
    let raw = path.to_string_lossy();
    match raw.strip_suffix(suffix) {
        Some(stripped) => PathBuf::from(stripped),
        None => path.to_path_buf(),
    }
}
