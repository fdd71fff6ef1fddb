//! Entry module identification
//!
//! Module ids are compared as normalized absolute paths: a leading `./` is
//! dropped, relative ids are joined to the working directory and `.`/`..`
//! components are folded lexically. Nothing touches the filesystem, so virtual
//! ids compare the same way as real files.

use std::path::{Component, Path, PathBuf};

/// The module the host flagged as the build's entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryModule {
    path: PathBuf,
}

impl EntryModule {
    pub fn resolve(id: &str, root: &Path) -> Self {
        Self {
            path: module_path(id, root),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `id` names this module
    pub fn matches(&self, id: &str, root: &Path) -> bool {
        module_path(id, root) == self.path
    }
}

fn module_path(id: &str, root: &Path) -> PathBuf {
    let id = id.strip_prefix("./").unwrap_or(id);
    let path = Path::new(id);
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&root.join(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
