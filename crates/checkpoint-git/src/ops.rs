//! Gateway operations against a project repository.
//!
//! [`GitOperations`] is the narrow capability surface the CLI dispatches
//! against; [`SystemGit`] is the process-backed implementation that drives
//! the `git` binary in a project directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::commands::{GitError, Result, git_command};

/// Starter ignore rules seeded by [`GitOperations::initialize_repository`].
const GITIGNORE_CONTENT: &str = "\
# Logs
*.log

# OS droppings
.DS_Store
Thumbs.db

# Editor state
*.swp
.idea/
.vscode/
";

/// Capability surface for driving revision control.
///
/// The two probes are read-only and never touch the repository; the
/// remaining operations each map to a single unit of git work. Command
/// handlers depend on this trait only, never on [`SystemGit`] directly.
pub trait GitOperations {
    /// Whether revision control is already set up for the project.
    fn is_repository_initialized(&self) -> bool;

    /// Whether setup may run (i.e. no repository exists yet).
    fn is_setup_available(&self) -> bool;

    /// Create the repository and seed a starter `.gitignore`.
    fn initialize_repository(&self) -> Result<()>;

    /// Write one configuration entry.
    ///
    /// `section` may carry a quoted subsection (`remote "origin"`); the
    /// implementation folds it to the dotted name git expects.
    fn set_config_value(&self, section: &str, key: &str, value: &str) -> Result<()>;

    /// Stage every change (including untracked files) and record a single
    /// commit with `message`.
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Negate the most recent `count` commits with one new inverse commit
    /// recorded with `message`. Never rewrites history.
    fn revert_commits(&self, count: u32, message: &str) -> Result<()>;
}

/// Process-backed [`GitOperations`] rooted at a project directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    root: PathBuf,
}

impl SystemGit {
    /// Create a gateway operating on `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root this gateway operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        git_command(args, &self.root)
    }
}

impl GitOperations for SystemGit {
    fn is_repository_initialized(&self) -> bool {
        // .git is a directory in a regular repository, a file in worktrees.
        self.root.join(".git").exists()
    }

    fn is_setup_available(&self) -> bool {
        !self.is_repository_initialized()
    }

    fn initialize_repository(&self) -> Result<()> {
        if self.is_repository_initialized() {
            return Err(GitError::AlreadyInitialized(self.root.clone()));
        }

        info!(root = %self.root.display(), "initializing repository");
        self.git(&["init"])?;

        let gitignore = self.root.join(".gitignore");
        if !gitignore.exists() {
            fs::write(&gitignore, GITIGNORE_CONTENT).map_err(|source| GitError::Io {
                path: gitignore.clone(),
                source,
            })?;
            debug!(path = %gitignore.display(), "seeded starter .gitignore");
        }

        Ok(())
    }

    fn set_config_value(&self, section: &str, key: &str, value: &str) -> Result<()> {
        let name = config_name(section, key);
        debug!(%name, %value, "writing config entry");
        self.git(&["config", &name, value])?;
        Ok(())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        self.git(&["add", "-A"])?;
        self.git(&["commit", "-m", message])?;
        info!("committed all changes");
        Ok(())
    }

    fn revert_commits(&self, count: u32, message: &str) -> Result<()> {
        let range = format!("HEAD~{count}..HEAD");
        self.git(&["revert", "--no-commit", &range])?;
        self.git(&["commit", "-m", message])?;
        info!(count, "reverted commits");
        Ok(())
    }
}

/// Map a config `(section, key)` pair to git's dotted name.
///
/// A quoted subsection (`remote "origin"`) folds to the dotted form git
/// expects on the command line (`remote.origin`).
pub fn config_name(section: &str, key: &str) -> String {
    let mut name = String::new();
    for part in section.split_whitespace() {
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(part.trim_matches('"'));
    }
    format!("{name}.{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scratch() -> (tempfile::TempDir, SystemGit) {
        let dir = tempfile::tempdir().unwrap();
        let git = SystemGit::new(dir.path());
        (dir, git)
    }

    /// Initialized repository with a committer identity, so commit and
    /// revert work in environments without global git config.
    fn scratch_repo() -> (tempfile::TempDir, SystemGit) {
        let (dir, git) = scratch();
        git.initialize_repository().unwrap();
        git.set_config_value("user", "name", "Test User").unwrap();
        git.set_config_value("user", "email", "test@example.com")
            .unwrap();
        (dir, git)
    }

    #[test]
    fn config_name_plain_section() {
        assert_eq!(config_name("user", "name"), "user.name");
        assert_eq!(config_name("color", "diff"), "color.diff");
    }

    #[test]
    fn config_name_quoted_subsection() {
        assert_eq!(config_name("remote \"origin\"", "url"), "remote.origin.url");
    }

    #[test]
    fn probes_flip_after_initialize() {
        let (_dir, git) = scratch();
        assert!(git.is_setup_available());
        assert!(!git.is_repository_initialized());

        git.initialize_repository().unwrap();
        assert!(!git.is_setup_available());
        assert!(git.is_repository_initialized());
    }

    #[test]
    fn initialize_twice_is_refused() {
        let (_dir, git) = scratch();
        git.initialize_repository().unwrap();
        match git.initialize_repository() {
            Err(GitError::AlreadyInitialized(_)) => {}
            other => panic!("expected AlreadyInitialized, got: {other:?}"),
        }
    }

    #[test]
    fn initialize_seeds_gitignore() {
        let (dir, git) = scratch();
        git.initialize_repository().unwrap();
        let content = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
        assert!(content.contains("*.log"));
    }

    #[test]
    fn set_config_value_round_trips() {
        let (dir, git) = scratch();
        git.initialize_repository().unwrap();
        git.set_config_value("user", "name", "Alice").unwrap();
        git.set_config_value("remote \"origin\"", "url", "https://example.com/repo.git")
            .unwrap();

        assert_eq!(
            git_command(&["config", "--get", "user.name"], dir.path()).unwrap(),
            "Alice"
        );
        assert_eq!(
            git_command(&["config", "--get", "remote.origin.url"], dir.path()).unwrap(),
            "https://example.com/repo.git"
        );
    }

    #[test]
    fn commit_all_records_one_commit() {
        let (dir, git) = scratch_repo();
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        git.commit_all("first checkpoint").unwrap();

        let count = git_command(&["rev-list", "--count", "HEAD"], dir.path()).unwrap();
        assert_eq!(count, "1");
        let subject = git_command(&["log", "-1", "--format=%s"], dir.path()).unwrap();
        assert_eq!(subject, "first checkpoint");
    }

    #[test]
    fn commit_all_with_no_changes_fails() {
        let (dir, git) = scratch_repo();
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        git.commit_all("first").unwrap();
        assert!(git.commit_all("second").is_err());
    }

    #[test]
    fn revert_adds_inverse_commit() {
        let (dir, git) = scratch_repo();
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        git.commit_all("first").unwrap();
        std::fs::write(dir.path().join("a.txt"), "two\n").unwrap();
        git.commit_all("second").unwrap();

        git.revert_commits(1, "undo second").unwrap();

        let count = git_command(&["rev-list", "--count", "HEAD"], dir.path()).unwrap();
        assert_eq!(count, "3");
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "one\n"
        );
        let subject = git_command(&["log", "-1", "--format=%s"], dir.path()).unwrap();
        assert_eq!(subject, "undo second");
    }

    #[test]
    fn revert_beyond_history_fails() {
        let (dir, git) = scratch_repo();
        std::fs::write(dir.path().join("a.txt"), "one\n").unwrap();
        git.commit_all("only").unwrap();
        assert!(git.revert_commits(3, "too far").is_err());
    }
}
