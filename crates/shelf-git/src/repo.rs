//! Repository detection and working-tree queries.
//!
//! The queries go through a [`CommandRunner`] so they answer for whatever
//! directory the runner is bound to.

use crate::commands::{CommandRunner, GitError, Result};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One line of `git status --porcelain` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// The two-character `XY` status code (e.g. `" M"`, `"??"`, `"A "`).
    pub code: String,
    /// The path as printed by git. Renames keep the `old -> new` form.
    pub path: String,
}

impl StatusEntry {
    /// Parse a single porcelain v1 line. Returns `None` for blank or
    /// truncated lines.
    pub fn parse(line: &str) -> Option<Self> {
        if line.len() < 4 || !line.is_char_boundary(2) {
            return None;
        }
        let (code, rest) = line.split_at(2);
        let path = rest.strip_prefix(' ')?;
        if path.is_empty() {
            return None;
        }
        Some(Self {
            code: code.to_string(),
            path: path.to_string(),
        })
    }

    /// Returns `true` for files git does not track yet.
    pub fn is_untracked(&self) -> bool {
        self.code == "??"
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Locate the git directory for the runner's working directory, using
/// `git rev-parse --git-dir`.
///
/// Returns `None` when git exits non-zero, meaning "not a repository". Only
/// a failure to start git at all is reported as an error.
pub fn git_dir(runner: &impl CommandRunner) -> Result<Option<String>> {
    let output = runner.git(&["rev-parse", "--git-dir"])?;
    if !output.success() {
        return Ok(None);
    }
    Ok(Some(output.stdout.trim().to_string()))
}

/// List the working-tree differences reported by `git status --porcelain`.
///
/// An empty list means the tree is clean.
///
/// # Errors
///
/// Returns [`GitError::SpawnError`](crate::GitError::SpawnError) if git
/// cannot be started, or [`GitError::CommandFailed`](crate::GitError::CommandFailed)
/// if the status query exits non-zero.
pub fn working_tree_status(runner: &impl CommandRunner) -> Result<Vec<StatusEntry>> {
    let output = runner.git(&["status", "--porcelain"])?;
    if !output.success() {
        return Err(GitError::CommandFailed {
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        });
    }
    Ok(parse_porcelain(&output.stdout))
}

/// Parse full `git status --porcelain` output. Leading spaces are
/// significant (`" M file"`), so lines are not trimmed.
pub fn parse_porcelain(stdout: &str) -> Vec<StatusEntry> {
    stdout
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter_map(StatusEntry::parse)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
