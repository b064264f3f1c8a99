//! `shelf` -- publish book list changes with git.
//!
//! This is the entry point of the shelf CLI. It parses arguments with clap,
//! resolves the runtime context, and runs the publish workflow.

mod cli;
mod context;
mod output;

use std::io;

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser};
use shelf_git::GitCli;
use shelf_publish::{PublishError, PublishRequest, PublishWorkflow};
use shelf_ui::terminal::stderr_supports_color;
use shelf_ui::ICON_FAIL;
use tracing::debug;

use cli::{wants_help, Cli};
use context::{error_palette, RuntimeContext};
use output::{output_json, output_json_error};

fn main() {
    // `--help` wins wherever it appears, even among the message words.
    if wants_help(std::env::args_os().skip(1)) {
        Cli::command().print_long_help().ok();
        println!();
        return;
    }

    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("shelf=debug")
            .with_writer(std::io::stderr)
            .with_ansi(stderr_supports_color())
            .init();
    }

    let json = cli.global.json;
    let quiet = cli.global.quiet;

    // Handle errors: print message and exit with code 1
    if let Err(e) = run(cli) {
        if json {
            output_json_error(&e);
        } else {
            let p = error_palette(false);
            let already_shown = !quiet
                && matches!(
                    e.downcast_ref::<PublishError>(),
                    Some(PublishError::StepFailed { .. })
                );
            if already_shown {
                eprintln!(
                    "\n{}",
                    p.fail(&format!(
                        "{ICON_FAIL} Update failed. Please check the error above."
                    ))
                );
            } else {
                eprintln!("{}", p.fail(&format!("{ICON_FAIL} Error: {e:#}")));
            }
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = RuntimeContext::from_global_args(&cli.global)?;
    debug!(workdir = %ctx.workdir.display(), file = %ctx.config.file.display(), "starting publish");

    let runner = GitCli::with_program(&ctx.config.git_program, &ctx.workdir);
    let workflow = PublishWorkflow::new(runner, ctx.config.clone(), &ctx.workdir, ctx.palette);
    let request = PublishRequest {
        message_words: cli.message,
        now: Local::now().naive_local(),
    };

    let report = if ctx.shows_progress() {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        workflow.execute(&request, &mut handle)?
    } else {
        workflow.execute(&request, &mut io::sink())?
    };

    if ctx.json {
        output_json(&report);
    }
    Ok(())
}
