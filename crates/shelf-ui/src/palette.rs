//! Ayu color palette for shelf console output.
//!
//! Uses the Ayu Dark colors for consistent terminal styling.
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Small Unicode symbols for icons, not emoji blobs.

use owo_colors::OwoColorize;

use crate::terminal::{stderr_supports_color, supports_color};

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

const PASS: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - bright green
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const FAIL: (u8, u8, u8) = (0xf0, 0x71, 0x78); // #f07178 - bright red
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

pub const ICON_PASS: &str = "\u{2713}"; // ✓
pub const ICON_FAIL: &str = "\u{2716}"; // ✖

/// Decides once whether output is colored, then renders text accordingly.
///
/// Passed by value into whatever prints, so nothing consults the
/// environment after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    color: bool,
}

impl Palette {
    /// Palette following [`supports_color`].
    pub fn detect() -> Self {
        Self::new(supports_color())
    }

    /// Palette for diagnostics written to stderr, following
    /// [`stderr_supports_color`].
    pub fn detect_stderr() -> Self {
        Self::new(stderr_supports_color())
    }

    /// Palette that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether this palette emits ANSI escape codes.
    pub fn is_colored(&self) -> bool {
        self.color
    }

    fn rgb(&self, s: &str, rgb: (u8, u8, u8)) -> String {
        if self.color {
            s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
        } else {
            s.to_string()
        }
    }

    /// Renders text with pass (green) styling.
    pub fn pass(&self, s: &str) -> String {
        self.rgb(s, PASS)
    }

    /// Renders text with warning (yellow) styling.
    pub fn warn(&self, s: &str) -> String {
        self.rgb(s, WARN)
    }

    /// Renders text with fail (red) styling.
    pub fn fail(&self, s: &str) -> String {
        self.rgb(s, FAIL)
    }

    /// Renders text with muted (gray) styling.
    pub fn muted(&self, s: &str) -> String {
        self.rgb(s, MUTED)
    }

    /// Renders text with accent (blue) styling.
    pub fn accent(&self, s: &str) -> String {
        self.rgb(s, ACCENT)
    }

    /// Renders text in bold.
    pub fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }
}
