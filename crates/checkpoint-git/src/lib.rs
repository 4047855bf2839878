//! Git gateway for the checkpoint CLI.
//!
//! This crate owns every interaction with the `git` binary: repository
//! discovery, subprocess invocation, and the [`ops::GitOperations`]
//! capability trait the command dispatcher works against.

pub mod commands;
pub mod gitdir;
pub mod ops;

pub use commands::{GitError, Result};
pub use ops::{GitOperations, SystemGit};
