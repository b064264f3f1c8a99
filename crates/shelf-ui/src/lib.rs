//! Terminal styling for shelf.
//!
//! Provides an immutable color [`Palette`](palette::Palette) and terminal
//! color detection for CLI output.

pub mod palette;
pub mod terminal;

pub use palette::{Palette, ICON_FAIL, ICON_PASS};
