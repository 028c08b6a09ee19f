//! Path resolution for the tree header
//!
//! The header shows the root as an absolute path with `.` and `..`
//! components folded away lexically. Symlinks are not resolved.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the current directory and normalize it.
///
/// Unlike `canonicalize`, this does not touch the filesystem beyond reading
/// the current directory, so a symlinked root keeps its own name.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(normalize_lexically(&absolute))
}

/// Drop `.` components and apply `..` against the preceding component.
/// `..` at the filesystem root stays at the root.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
