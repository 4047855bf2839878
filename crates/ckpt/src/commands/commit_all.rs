//! `ckpt commit-all` -- commit every change in the project in one step.

use anyhow::{Context, Result};
use checkpoint_git::GitOperations;

use crate::cli::CommitAllArgs;
use crate::context::RuntimeContext;
use crate::error::CommandError;
use crate::output::output_json;

/// Execute the `ckpt commit-all` command.
pub fn run(ctx: &RuntimeContext, git: &dyn GitOperations, args: &CommitAllArgs) -> Result<()> {
    if args.message.is_empty() {
        return Err(
            CommandError::InvalidArgument("the commit message must not be empty".into()).into(),
        );
    }
    if !git.is_repository_initialized() {
        return Err(CommandError::RepositoryNotInitialized.into());
    }

    git.commit_all(&args.message).context("commit failed")?;

    if ctx.json {
        output_json(&serde_json::json!({
            "committed": true,
            "message": args.message,
        }));
    } else if !ctx.quiet {
        println!("Committed all changes: {}", args.message);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::mock::{Call, MockGit, test_ctx};

    #[test]
    fn commits_with_the_given_message() {
        let git = MockGit::with_repo();
        let args = CommitAllArgs {
            message: "checkpoint".to_string(),
        };
        run(&test_ctx(), &git, &args).unwrap();
        assert_eq!(git.calls(), vec![Call::CommitAll("checkpoint".to_string())]);
    }

    #[test]
    fn empty_message_is_invalid_and_issues_no_calls() {
        let git = MockGit::with_repo();
        let args = CommitAllArgs {
            message: String::new(),
        };
        let err = run(&test_ctx(), &git, &args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommandError>(),
            Some(CommandError::InvalidArgument(_))
        ));
        assert!(git.calls().is_empty());
    }

    #[test]
    fn refused_without_a_repository() {
        let git = MockGit::without_repo();
        let args = CommitAllArgs {
            message: "checkpoint".to_string(),
        };
        let err = run(&test_ctx(), &git, &args).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CommandError>(),
            Some(&CommandError::RepositoryNotInitialized)
        );
        assert!(git.calls().is_empty());
    }
}
