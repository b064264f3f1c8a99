//! The publish workflow runner.
//!
//! A run goes: preconditions, change detection, commit message, then
//! stage, commit and push. The first failing step ends the run; a local
//! commit is left in place when only the push fails.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use shelf_config::PublishConfig;
use shelf_git::repo::{git_dir, working_tree_status};
use shelf_git::{CommandOutput, CommandRunner, StatusEntry};
use shelf_ui::{Palette, ICON_FAIL, ICON_PASS};
use tracing::{debug, warn};

use crate::error::PublishError;
use crate::message::resolve_commit_message;
use crate::report::{Outcome, PublishReport, StepResult};
use crate::step::Step;

/// Inputs that vary per invocation.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    /// Commit message words from the command line. Empty means "generate".
    pub message_words: Vec<String>,
    /// Wall-clock time used for a generated message.
    pub now: NaiveDateTime,
}

/// Runs the publish sequence against a [`CommandRunner`].
pub struct PublishWorkflow<R> {
    runner: R,
    config: PublishConfig,
    workdir: PathBuf,
    palette: Palette,
}

impl<R: CommandRunner> PublishWorkflow<R> {
    pub fn new(runner: R, config: PublishConfig, workdir: impl Into<PathBuf>, palette: Palette) -> Self {
        Self {
            runner,
            config,
            workdir: workdir.into(),
            palette,
        }
    }

    /// Path of the tracked book list.
    pub fn book_file(&self) -> PathBuf {
        self.workdir.join(&self.config.file)
    }

    /// Verify the book list exists and the working directory is a git
    /// repository.
    ///
    /// The file check touches only the filesystem, so it runs first and a
    /// missing file never reaches git.
    pub fn check_preconditions(&self) -> Result<(), PublishError> {
        if !self.book_file().is_file() {
            return Err(PublishError::BookFileMissing(self.config.file.clone()));
        }
        match git_dir(&self.runner)? {
            Some(dir) => {
                debug!(git_dir = %dir, "repository found");
                Ok(())
            }
            None => Err(PublishError::NotARepository),
        }
    }

    /// Working-tree differences. A failing status query counts as a clean
    /// tree unless `strict_status` is set.
    pub fn pending_changes(&self) -> Result<Vec<StatusEntry>, PublishError> {
        match working_tree_status(&self.runner) {
            Ok(entries) => Ok(entries),
            Err(e) if self.config.strict_status => Err(PublishError::StatusQuery(e)),
            Err(e) => {
                warn!(error = %e, "git status failed; treating the working tree as clean");
                Ok(Vec::new())
            }
        }
    }

    /// Git arguments for `step`.
    pub fn step_args<'a>(&'a self, step: Step, message: &'a str) -> Vec<&'a str> {
        match step {
            Step::Stage => vec!["add", "--all"],
            Step::Commit => vec!["commit", "-m", message],
            Step::Push => self.config.push_args(),
        }
    }

    /// Run one step, printing its progress and output.
    ///
    /// On failure the returned [`StepResult::output`] holds the error text
    /// that was printed.
    pub fn run_step(&self, step: Step, args: &[&str], out: &mut dyn Write) -> StepResult {
        let p = &self.palette;
        say(out, p.accent(&format!("{}...", step.description())));

        match self.runner.git(args) {
            Ok(output) if output.success() => {
                let stdout = output.stdout.trim();
                if !stdout.is_empty() {
                    say(out, stdout.to_string());
                }
                StepResult {
                    step,
                    success: true,
                    output: combined(&output),
                }
            }
            Ok(output) => {
                let detail = failure_detail(&output);
                say(out, p.fail(&format!("{ICON_FAIL} Error: {detail}")));
                StepResult {
                    step,
                    success: false,
                    output: detail,
                }
            }
            Err(e) => {
                say(out, p.fail(&format!("{ICON_FAIL} Error: {e}")));
                StepResult {
                    step,
                    success: false,
                    output: e.to_string(),
                }
            }
        }
    }

    /// Run the whole workflow.
    ///
    /// Returns the report for a clean tree or a completed publish. Any
    /// precondition or step failure is an error; steps after a failed one
    /// are never attempted.
    pub fn execute(
        &self,
        request: &PublishRequest,
        out: &mut dyn Write,
    ) -> Result<PublishReport, PublishError> {
        let p = &self.palette;
        say(out, format!("{}\n", p.bold("Book list update")));

        self.check_preconditions()?;

        let changes = self.pending_changes()?;
        if changes.is_empty() {
            say(
                out,
                p.pass(&format!(
                    "{ICON_PASS} No changes detected. Your book list is up to date!"
                )),
            );
            return Ok(PublishReport::up_to_date());
        }

        for change in &changes {
            let label = if change.is_untracked() { " (new)" } else { "" };
            say(out, p.muted(&format!("  {} {}{label}", change.code, change.path)));
        }

        let message = resolve_commit_message(
            &request.message_words,
            &self.config.message_prefix,
            request.now,
        );
        say(out, format!("Commit message: \"{message}\"\n"));

        let mut report = PublishReport {
            outcome: Outcome::Published,
            has_pending_changes: true,
            commit_message: Some(message.clone()),
            changes: changes.into_iter().map(Into::into).collect(),
            steps: Vec::with_capacity(Step::ORDER.len()),
        };

        for step in Step::ORDER {
            let args = self.step_args(step, &message);
            let result = self.run_step(step, &args, out);
            if !result.success {
                return Err(PublishError::StepFailed {
                    step,
                    detail: result.output,
                });
            }
            report.steps.push(result);
        }

        say(
            out,
            p.pass(&format!("\n{ICON_PASS} Book list updated successfully!")),
        );
        if let Some(notice) = self.config.notice() {
            say(out, p.warn(notice));
        }
        Ok(report)
    }
}

/// Write one line, ignoring broken pipe errors (e.g., piped to `head`).
fn say(out: &mut dyn Write, line: String) {
    let _ = writeln!(out, "{line}");
}

fn failure_detail(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = output.stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    match output.code {
        Some(code) => format!("git exited with status {code}"),
        None => "git was terminated by a signal".to_string(),
    }
}

fn combined(output: &CommandOutput) -> String {
    [output.stdout.trim(), output.stderr.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
