//! Configuration types and loading for shelf.
//!
//! The main entry point is [`PublishConfig`]. It is resolved by
//! [`load_config`] from three layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. `.shelf.yaml` in the working directory (or an explicit file),
//! 3. environment variables prefixed with `SHELF_`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE_NAME: &str = ".shelf.yaml";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "SHELF_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer contained invalid YAML or a wrongly typed value.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// Settings for one publish run.
///
/// Every field has a default, so a partial file or a single environment
/// variable is enough to change one setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// The tracked book list, relative to the working directory.
    pub file: PathBuf,

    /// Prefix of the generated commit message.
    pub message_prefix: String,

    /// Remote passed to `git push`. `None` lets git pick the upstream.
    pub remote: Option<String>,

    /// Branch passed to `git push`; only used together with `remote`.
    pub branch: Option<String>,

    /// Abort when `git status` fails instead of treating it as "no changes".
    pub strict_status: bool,

    /// Line printed after a successful publish. Empty disables it.
    pub notice: Option<String>,

    /// The git executable to run.
    pub git_program: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("books.md"),
            message_prefix: "Update book list".to_string(),
            remote: None,
            branch: None,
            strict_status: false,
            notice: Some(
                "Your changes should be live on GitHub Pages in a few minutes.".to_string(),
            ),
            git_program: "git".to_string(),
        }
    }
}

impl PublishConfig {
    /// The closing notice, or `None` when unset or blank.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Arguments for the push step, e.g. `["push", "origin", "main"]`.
    pub fn push_args(&self) -> Vec<&str> {
        let mut args = vec!["push"];
        if let Some(remote) = self.remote.as_deref().filter(|r| !r.is_empty()) {
            args.push(remote);
            if let Some(branch) = self.branch.as_deref().filter(|b| !b.is_empty()) {
                args.push(branch);
            }
        }
        args
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the layered [`Figment`] for `dir`.
///
/// `explicit` replaces the default `.shelf.yaml` lookup; relative paths are
/// resolved against `dir`. Unlike the default file, an explicit file must
/// exist.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if `explicit` does not exist.
pub fn figment(dir: &Path, explicit: Option<&Path>) -> Result<Figment> {
    let file = match explicit {
        Some(path) => {
            let path = dir.join(path);
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path));
            }
            path
        }
        None => dir.join(CONFIG_FILE_NAME),
    };
    debug!(file = %file.display(), "resolving configuration");

    Ok(Figment::from(Serialized::defaults(PublishConfig::default()))
        .merge(Yaml::file(file))
        .merge(Env::prefixed(ENV_PREFIX)))
}

/// Load the configuration for a run in `dir`.
///
/// A missing `.shelf.yaml` is not an error; defaults apply.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] for a missing explicit file, or
/// [`ConfigError::Invalid`] if any layer fails to parse or has the wrong
/// type for a key.
pub fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<PublishConfig> {
    let config: PublishConfig = figment(dir, explicit)?.extract()?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
