//! Change detection and publish workflow for shelf.
//!
//! [`PublishWorkflow`] checks that the book list and repository exist,
//! looks for pending changes, and runs stage, commit and push in order,
//! stopping at the first failure.

pub mod error;
pub mod message;
pub mod report;
pub mod step;
pub mod workflow;

pub use error::PublishError;
pub use message::resolve_commit_message;
pub use report::{Change, Outcome, PublishReport, StepResult};
pub use step::Step;
pub use workflow::{PublishRequest, PublishWorkflow};
