//! The record of one publish run.

use serde::Serialize;
use shelf_git::StatusEntry;

use crate::step::Step;

/// How a run that did not fail ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The working tree was clean; nothing was staged, committed or pushed.
    UpToDate,
    /// All three steps succeeded.
    Published,
}

/// One working-tree difference that triggered the publish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub code: String,
    pub path: String,
}

impl From<StatusEntry> for Change {
    fn from(entry: StatusEntry) -> Self {
        Self {
            code: entry.code,
            path: entry.path,
        }
    }
}

/// The outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepResult {
    pub step: Step,
    pub success: bool,
    /// Trimmed stdout followed by trimmed stderr on success; the printed
    /// error text on failure.
    pub output: String,
}

/// Summary of a run, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub outcome: Outcome,
    pub has_pending_changes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
    pub changes: Vec<Change>,
    pub steps: Vec<StepResult>,
}

impl PublishReport {
    /// Report for a clean working tree.
    pub fn up_to_date() -> Self {
        Self {
            outcome: Outcome::UpToDate,
            has_pending_changes: false,
            commit_message: None,
            changes: Vec::new(),
            steps: Vec::new(),
        }
    }
}
