//! `ckpt setup` -- set up git revision control for the project.

use anyhow::{Context, Result};
use checkpoint_git::GitOperations;

use crate::context::RuntimeContext;
use crate::error::CommandError;
use crate::output::output_json;

/// Execute the `ckpt setup` command.
pub fn run(ctx: &RuntimeContext, git: &dyn GitOperations) -> Result<()> {
    if !git.is_setup_available() {
        return Err(CommandError::SetupAlreadyDone.into());
    }

    git.initialize_repository().with_context(|| {
        format!(
            "failed to set up revision control in {}",
            ctx.root.display()
        )
    })?;

    if ctx.json {
        output_json(&serde_json::json!({
            "initialized": true,
            "root": ctx.root.display().to_string(),
        }));
    } else if !ctx.quiet {
        println!("Revision control set up in {}", ctx.root.display());
        println!("Run `ckpt config --user-name <name> --email <email>` next.");
    }

    Ok(())
}
