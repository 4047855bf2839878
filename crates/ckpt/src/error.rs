//! Dispatcher-level error types.
//!
//! [`CommandError`] covers the failures the dispatcher itself can raise,
//! all of which happen before any mutating gateway call. Gateway failures
//! travel as [`checkpoint_git::GitError`] through the anyhow chain and are
//! surfaced to the user verbatim, with no retry.

use thiserror::Error;

/// Failures raised by the command dispatcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// A mandatory option was empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `setup` was run against a project that already has revision control.
    #[error("revision control is already set up for this project")]
    SetupAlreadyDone,

    /// A repository-facing command ran where no repository exists.
    #[error("no repository here; run `ckpt setup` first")]
    RepositoryNotInitialized,
}
