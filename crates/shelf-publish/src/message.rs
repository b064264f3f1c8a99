//! Commit message resolution.

use chrono::NaiveDateTime;

/// Format of the timestamp in generated messages: `Aug 19, 2025 at 3:45 PM`.
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

/// Returns the caller's words joined by single spaces, or a generated
/// `"<prefix> - <timestamp>"` message when there are none.
///
/// The words are used verbatim: no trimming, no escaping.
pub fn resolve_commit_message(words: &[String], prefix: &str, now: NaiveDateTime) -> String {
    if words.is_empty() {
        default_message(prefix, now)
    } else {
        words.join(" ")
    }
}

/// The generated message for `now`.
pub fn default_message(prefix: &str, now: NaiveDateTime) -> String {
    format!("{prefix} - {}", now.format(TIMESTAMP_FORMAT))
}
