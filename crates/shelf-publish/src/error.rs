//! Publish error types.

use std::path::PathBuf;

use shelf_git::GitError;

use crate::step::Step;

/// Errors that stop a publish run. Every variant maps to exit status 1.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The tracked book list does not exist.
    #[error("{} not found (create it first)", .0.display())]
    BookFileMissing(PathBuf),

    /// The working directory is not inside a git repository.
    #[error("not a git repository (run 'git init' first)")]
    NotARepository,

    /// `git status` failed while strict status checking was enabled.
    #[error("could not read working tree status: {0}")]
    StatusQuery(#[source] GitError),

    /// One of stage, commit or push failed; later steps were skipped.
    #[error("update failed at the {step} step: {detail}")]
    StepFailed {
        /// The step that failed.
        step: Step,
        /// The error text git printed, as already shown by the step.
        detail: String,
    },

    /// git could not be started for the repository check.
    #[error(transparent)]
    Git(#[from] GitError),
}
