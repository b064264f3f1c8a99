//! The fixed publish steps.

use std::fmt;

use serde::Serialize;

/// One version-control step of a publish, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// `git add --all`
    Stage,
    /// `git commit -m <message>`
    Commit,
    /// `git push [<remote> [<branch>]]`
    Push,
}

impl Step {
    /// All steps in the order they run.
    pub const ORDER: [Step; 3] = [Step::Stage, Step::Commit, Step::Push];

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Stage => "stage",
            Step::Commit => "commit",
            Step::Push => "push",
        }
    }

    /// Progress line shown while the step runs.
    pub fn description(self) -> &'static str {
        match self {
            Step::Stage => "Adding changes to staging area",
            Step::Commit => "Creating commit",
            Step::Push => "Pushing to remote",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
