//! Repository discovery.
//!
//! Walks the directory tree to locate the enclosing repository root so the
//! CLI can be invoked from anywhere inside a project.

use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a `.git` entry.
///
/// `.git` is a directory in a regular repository and a file in linked
/// worktrees; both count. Returns the repository root (the directory
/// containing `.git`), or `None` when the filesystem root is reached
/// without finding one.
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
    // Canonicalize so the walk runs over absolute paths.
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

/// Whether `path` is inside a git repository.
pub fn is_git_repo(path: &Path) -> bool {
    find_git_root(path).is_some()
}
