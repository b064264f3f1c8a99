//! Runtime context for a publish run.
//!
//! The [`RuntimeContext`] holds everything resolved before the workflow
//! starts: the working directory, the layered configuration with CLI
//! overrides applied, and the output mode.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use shelf_config::{load_config, PublishConfig};
use shelf_ui::Palette;

use crate::cli::GlobalArgs;

/// Runtime context passed to the command handler.
///
/// Constructed once in `main` after CLI parsing.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Directory the run is anchored to (the process working directory).
    pub workdir: PathBuf,

    /// Resolved configuration.
    pub config: PublishConfig,

    /// Console colors for progress output.
    pub palette: Palette,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Quiet mode: suppress progress output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Configuration precedence: `--file` flag > `SHELF_*` env >
    /// config file > defaults.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let workdir = env::current_dir().context("cannot determine the working directory")?;
        let config = load_config(&workdir, global.config.as_deref())?;
        Ok(Self::with_config(workdir, config, global))
    }

    fn with_config(workdir: PathBuf, mut config: PublishConfig, global: &GlobalArgs) -> Self {
        if let Some(file) = &global.file {
            config.file = file.clone();
        }

        Self {
            workdir,
            config,
            palette: output_palette(global.json),
            json: global.json,
            quiet: global.quiet,
        }
    }

    /// Whether progress text should be printed.
    pub fn shows_progress(&self) -> bool {
        !self.json && !self.quiet
    }
}

/// Palette for human output; JSON output is never colored.
pub fn output_palette(json: bool) -> Palette {
    if json {
        Palette::plain()
    } else {
        Palette::detect()
    }
}

/// Palette for the final error line, which goes to stderr and so follows
/// stderr's terminal state rather than stdout's.
pub fn error_palette(json: bool) -> Palette {
    if json {
        Palette::plain()
    } else {
        Palette::detect_stderr()
    }
}
