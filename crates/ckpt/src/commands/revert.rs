//! `ckpt revert` -- negate recent commits with a new inverse commit.
//!
//! `revert last` is shorthand for `revert commit` with a count of one;
//! both funnel into the same gateway call.

use anyhow::{Context, Result};
use checkpoint_git::GitOperations;

use crate::cli::{RevertArgs, RevertCommands};
use crate::context::RuntimeContext;
use crate::error::CommandError;
use crate::output::output_json;

/// Execute the `ckpt revert` command.
pub fn run(ctx: &RuntimeContext, git: &dyn GitOperations, args: &RevertArgs) -> Result<()> {
    match &args.command {
        RevertCommands::Last(last) => revert(ctx, git, 1, &last.message),
        RevertCommands::Commit(commit) => revert(ctx, git, commit.commit_count, &commit.message),
    }
}

fn revert(
    ctx: &RuntimeContext,
    git: &dyn GitOperations,
    count: u32,
    message: &str,
) -> Result<()> {
    if count < 1 {
        return Err(
            CommandError::InvalidArgument("the commit count must be at least 1".into()).into(),
        );
    }
    if message.is_empty() {
        return Err(
            CommandError::InvalidArgument("the commit message must not be empty".into()).into(),
        );
    }
    if !git.is_repository_initialized() {
        return Err(CommandError::RepositoryNotInitialized.into());
    }

    git.revert_commits(count, message)
        .with_context(|| format!("failed to revert the last {count} commit(s)"))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "reverted": count,
            "message": message,
        }));
    } else if !ctx.quiet {
        println!("Reverted the last {count} commit(s) as a new commit");
    }

    Ok(())
}
