//! `ckpt` -- checkpoint a project directory with git.
//!
//! Entry point: parses CLI arguments with clap, resolves the runtime
//! context, builds the process-backed gateway, and dispatches to command
//! handlers.

mod cli;
mod commands;
mod context;
mod error;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use checkpoint_git::SystemGit;
use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global);

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("ckpt=debug,checkpoint_git=debug")
            .with_writer(std::io::stderr)
            .init();
    }
    tracing::debug!(root = %ctx.root.display(), "resolved project root");

    // One gateway per invocation, rooted at the resolved project directory.
    let git = SystemGit::new(ctx.root.clone());

    let result = match cli.command {
        Some(Commands::Setup) => commands::setup::run(&ctx, &git),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &git, &args),
        Some(Commands::CommitAll(args)) => commands::commit_all::run(&ctx, &git, &args),
        Some(Commands::Revert(args)) => commands::revert::run(&ctx, &git, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, &args),
        None => {
            // No subcommand -- print help.
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
