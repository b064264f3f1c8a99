//! Git command execution wrappers.
//!
//! Provides a thin wrapper around `git` subprocess invocation so that the
//! rest of the codebase does not need to deal with `std::process::Command`
//! directly. Callers depend on the [`CommandRunner`] trait so a scripted
//! runner can stand in for a real repository in tests.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::debug;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when running git commands.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute git: {0}")]
    SpawnError(#[from] std::io::Error),

    /// The git command exited with a non-zero status.
    #[error("git command failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

// ---------------------------------------------------------------------------
// Runner capability
// ---------------------------------------------------------------------------

/// Captured result of one finished git process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// The exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Everything the process wrote to stdout.
    pub stdout: String,
    /// Everything the process wrote to stderr.
    pub stderr: String,
}

impl CommandOutput {
    /// A successful result with the given stdout.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed result with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Returns `true` if the process exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can run a git command to completion.
///
/// Implementations block until the process exits. `Err` is reserved for
/// failing to start the process at all; a non-zero exit is reported through
/// [`CommandOutput::code`].
pub trait CommandRunner {
    /// Run `git` with `args` and capture its output.
    fn git(&self, args: &[&str]) -> Result<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn git(&self, args: &[&str]) -> Result<CommandOutput> {
        (**self).git(args)
    }
}

/// The real [`CommandRunner`]: spawns the git executable in a fixed
/// working directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
    cwd: PathBuf,
}

impl GitCli {
    /// Runner using the `git` found on `PATH`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self::with_program("git", cwd)
    }

    /// Runner using an explicit git executable.
    pub fn with_program(program: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }
}

impl CommandRunner for GitCli {
    fn git(&self, args: &[&str]) -> Result<CommandOutput> {
        debug!(program = ?self.program, ?args, cwd = %self.cwd.display(), "running git");
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.cwd)
            .output()?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(code = ?result.code, "git finished");
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
