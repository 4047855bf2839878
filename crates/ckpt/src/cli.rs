//! Clap CLI definitions for the `ckpt` command.
//!
//! The whole command surface is declared here with clap 4 derive macros;
//! option schemas (names, mandatory flags, defaults) live in the arg
//! attributes and are built once at process start.

use clap::{Args, Parser, Subcommand};

/// ckpt -- checkpoint a project directory with git.
#[derive(Parser, Debug)]
#[command(
    name = "ckpt",
    about = "Checkpoint a project directory with git",
    long_about = "Drives a local git repository through a small, fixed set of operations: \
set up revision control, write configuration, commit everything in one step, \
and revert recent commits.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project directory (default: the enclosing repository root, else the
    /// current directory).
    #[arg(short = 'C', long = "dir", global = true, value_name = "PATH")]
    pub dir: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up git revision control for the project.
    Setup,

    /// Write git configuration for the project (.git/config).
    Config(ConfigArgs),

    /// Commit all changes in the project in one step.
    #[command(alias = "commit")]
    CommitAll(CommitAllArgs),

    /// Revert recent commits with a new inverse commit.
    Revert(RevertArgs),

    /// Print version information.
    Version,

    /// Generate shell completions.
    Completion(CompletionArgs),
}

/// Arguments for `ckpt config`.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// The user name to record on commits.
    #[arg(long, value_name = "NAME")]
    pub user_name: Option<String>,

    /// The user email to record on commits.
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// URL of the remote repository (stored as remote "origin").
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Enable color coding of git output in the shell.
    #[arg(long)]
    pub color_coding: bool,
}

/// Arguments for `ckpt commit-all`.
#[derive(Args, Debug)]
pub struct CommitAllArgs {
    /// The commit message.
    #[arg(short = 'm', long)]
    pub message: String,
}

/// Arguments for `ckpt revert`.
#[derive(Args, Debug)]
pub struct RevertArgs {
    #[command(subcommand)]
    pub command: RevertCommands,
}

/// Revert subcommands.
#[derive(Subcommand, Debug)]
pub enum RevertCommands {
    /// Revert the last commit.
    Last(RevertLastArgs),
    /// Revert the last N commits.
    Commit(RevertCommitArgs),
}

/// Arguments for `ckpt revert last`.
#[derive(Args, Debug)]
pub struct RevertLastArgs {
    /// The commit message for the revert commit.
    #[arg(short = 'm', long)]
    pub message: String,
}

/// Arguments for `ckpt revert commit`.
#[derive(Args, Debug)]
pub struct RevertCommitArgs {
    /// Number of commits to revert.
    #[arg(short = 'n', long)]
    pub commit_count: u32,

    /// The commit message for the revert commit.
    #[arg(short = 'm', long)]
    pub message: String,
}

/// Arguments for `ckpt completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn commit_alias_resolves_to_commit_all() {
        let cli = Cli::try_parse_from(["ckpt", "commit", "-m", "msg"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::CommitAll(_))));
    }

    #[test]
    fn revert_commit_requires_count_and_message() {
        assert!(Cli::try_parse_from(["ckpt", "revert", "commit", "-m", "msg"]).is_err());
        assert!(Cli::try_parse_from(["ckpt", "revert", "commit", "-n", "2"]).is_err());
        assert!(Cli::try_parse_from(["ckpt", "revert", "commit", "-n", "2", "-m", "msg"]).is_ok());
    }

    #[test]
    fn global_flags_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["ckpt", "setup", "--json", "-q"]).unwrap();
        assert!(cli.global.json);
        assert!(cli.global.quiet);
    }
}
