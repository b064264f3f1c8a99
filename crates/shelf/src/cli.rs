//! Clap CLI definitions for the `shelf` command.

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::{Args, Parser};

const AFTER_LONG_HELP: &str = "\
Examples:
  shelf                                  Use a generated commit message
  shelf Added 5 new books to wishlist
  shelf \"Finished reading Dune\"

This will:
  1. Add all changes to git
  2. Create a commit with your message (or a generated one)
  3. Push the changes to the remote

Run it inside the git repository that holds your book list (books.md by
default). Settings can be placed in .shelf.yaml or SHELF_* variables.";

/// shelf -- publish changes to your book list.
#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    about = "Commit and push changes to your book list",
    long_about = "Commit and push changes to your book list.\n\nChecks that the book list and the git repository exist, and when the working tree has changes, stages them, commits with your message and pushes.",
    after_long_help = AFTER_LONG_HELP,
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Commit message; words are joined with single spaces. Generated with
    /// the current date and time when omitted.
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// Flags accepted before the message words.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Book list to publish (default: books.md, or `file` from the config).
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Configuration file to use instead of ./.shelf.yaml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the run report as JSON instead of progress text.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress progress output (errors only).
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// Returns `true` if `--help` or `-h` appears anywhere in `args`, including
/// among the message words.
pub fn wants_help<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .any(|a| a.as_ref() == "--help" || a.as_ref() == "-h")
}
