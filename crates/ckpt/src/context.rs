//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs:
//! resolved project root and the global output flags. Constructed once in
//! `main` after CLI parsing, before dispatch.

use std::env;
use std::path::PathBuf;

use checkpoint_git::gitdir;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    /// Project root the gateway operates on.
    pub root: PathBuf,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// The project root resolves as: `--dir` flag > enclosing repository
    /// root > current directory.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            root: resolve_root(global.dir.as_deref()),
            json: global.json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }
}

/// Resolves the project root using the priority chain.
fn resolve_root(flag_value: Option<&str>) -> PathBuf {
    if let Some(dir) = flag_value {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    gitdir::find_git_root(&cwd).unwrap_or(cwd)
}
