//! Git integration for shelf.
//!
//! This crate wraps `git` subprocess invocation behind the
//! [`CommandRunner`](commands::CommandRunner) capability and provides the
//! repository queries the publish workflow needs.

pub mod commands;
pub mod repo;

pub use commands::{CommandOutput, CommandRunner, GitCli, GitError};
pub use repo::StatusEntry;
