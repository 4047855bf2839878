//! Command handlers for the `ckpt` CLI.
//!
//! Each submodule implements one verb with the signature
//! `run(ctx, git, args) -> anyhow::Result<()>`. Handlers validate their
//! options, check the gateway's availability probe, and only then issue
//! mutating gateway calls.

pub mod commit_all;
pub mod completion;
pub mod config_cmd;
pub mod revert;
pub mod setup;
pub mod version;
