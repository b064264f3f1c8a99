//! Output helpers for the `shelf` CLI.

use serde::Serialize;
use std::io::{self, Write};

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print an error as a JSON object on stderr.
pub fn output_json_error(error: &anyhow::Error) {
    let err_json = serde_json::json!({
        "error": format!("{:#}", error),
    });
    if let Ok(s) = serde_json::to_string_pretty(&err_json) {
        eprintln!("{}", s);
    }
}
