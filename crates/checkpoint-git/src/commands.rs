//! Subprocess plumbing for the `git` binary.
//!
//! Every gateway operation funnels through [`git_command`] so the rest of
//! the workspace never touches `std::process::Command` directly.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Errors surfaced by the git gateway.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute git: {0}")]
    Spawn(#[source] std::io::Error),

    /// git exited with a non-zero status.
    #[error("git {command} failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The git subcommand that failed (e.g. `commit`).
        command: String,
        /// Exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// Trimmed stderr from git.
        stderr: String,
    },

    /// Setup was requested for a directory that already has a repository.
    #[error("repository already initialized at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    /// Filesystem work around the repository failed (e.g. seeding .gitignore).
    #[error("io error at {}", .path.display())]
    Io {
        /// Path the operation was writing.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for gateway operations.
pub type Result<T> = std::result::Result<T, GitError>;

/// Execute a `git` command with the given arguments and working directory.
///
/// Returns the trimmed contents of stdout on success. A non-zero exit
/// becomes [`GitError::CommandFailed`] carrying git's stderr verbatim; a
/// missing or unrunnable git binary becomes [`GitError::Spawn`].
pub fn git_command(args: &[&str], cwd: &Path) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(GitError::Spawn)?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: args.first().copied().unwrap_or_default().to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
