//! `ckpt config` -- write git configuration for the project (.git/config).

use anyhow::Result;
use checkpoint_git::GitOperations;

use crate::cli::ConfigArgs;
use crate::context::RuntimeContext;
use crate::error::CommandError;
use crate::output::output_json;

/// Color aspects switched on by `--color-coding`, in write order.
const COLOR_ASPECTS: [&str; 3] = ["diff", "branch", "status"];

/// Execute the `ckpt config` command.
///
/// Each non-empty option maps to one config entry. Entries are written
/// sequentially and independently: a mid-sequence failure leaves the
/// earlier entries in place, and re-running the command is safe because
/// every write is last-write-wins.
pub fn run(ctx: &RuntimeContext, git: &dyn GitOperations, args: &ConfigArgs) -> Result<()> {
    if !git.is_repository_initialized() {
        return Err(CommandError::RepositoryNotInitialized.into());
    }

    let mut written: Vec<String> = Vec::new();

    if let Some(name) = non_empty(&args.user_name) {
        git.set_config_value("user", "name", name)?;
        written.push("user.name".to_string());
    }
    if let Some(email) = non_empty(&args.email) {
        git.set_config_value("user", "email", email)?;
        written.push("user.email".to_string());
    }
    if let Some(url) = non_empty(&args.repo_url) {
        git.set_config_value("remote \"origin\"", "url", url)?;
        written.push("remote.origin.url".to_string());
    }
    if args.color_coding {
        for aspect in COLOR_ASPECTS {
            git.set_config_value("color", aspect, "auto")?;
            written.push(format!("color.{aspect}"));
        }
    }

    if ctx.json {
        output_json(&serde_json::json!({ "written": written }));
    } else if !ctx.quiet {
        if written.is_empty() {
            println!("Nothing to configure (no options given)");
        } else {
            println!("Wrote {}", written.join(", "));
        }
    }

    Ok(())
}

/// Returns the value when present and non-empty.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
