//! Configuration management for shelf.
//!
//! This crate resolves the layered [`PublishConfig`](config::PublishConfig):
//! built-in defaults, a `.shelf.yaml` file and `SHELF_*` environment
//! variables.

pub mod config;

pub use config::{load_config, ConfigError, PublishConfig, CONFIG_FILE_NAME, ENV_PREFIX};
