//! # Rendering Helpers
//!
//! Themed output, confirmation prompts, and the shared error reporter.
//!
//! The theme mirrors the dashboard's dark-mode switch: the same boolean that
//! once swapped Tailwind classes now swaps terminal colors.

use std::io::{BufRead, Write};

use colored::{ColoredString, Colorize};
use serde::Serialize;

use inventario_client::{ApiError, ApiResult};

/// Color palette derived from the persisted dark-mode flag.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn new(dark: bool) -> Self {
        Theme { dark }
    }

    /// Section headings.
    pub fn header(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_cyan().bold()
        } else {
            text.blue().bold()
        }
    }

    /// Secondary text (dates, ids, empty-state notices).
    pub fn muted(&self, text: &str) -> ColoredString {
        if self.dark {
            text.bright_black()
        } else {
            text.dimmed()
        }
    }

    /// Success notices.
    pub fn ok(&self, text: &str) -> ColoredString {
        text.green()
    }

    /// Errors and destructive highlights.
    pub fn err(&self, text: &str) -> ColoredString {
        text.red()
    }

    /// Warnings (low stock, pending states).
    pub fn warn(&self, text: &str) -> ColoredString {
        text.yellow()
    }
}

/// Prints any serializable payload as pretty JSON (the `--json` path).
pub fn print_json<T: Serialize>(value: &T) -> ApiResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

/// Asks for confirmation before a destructive action. Defaults to "no".
pub fn confirm(prompt: &str) -> ApiResult<bool> {
    eprint!("{} [y/N] ", prompt);
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Reads a line from stdin after a prompt. Used for the password when it is
/// not passed as a flag (terminal echo is acceptable for this console).
pub fn prompt_line(prompt: &str) -> ApiResult<String> {
    eprint!("{}", prompt);
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Shared failure reporter: one place mapping the error taxonomy to what the
/// user sees. Keeps every page's failure handling identical.
pub fn report_error(theme: &Theme, error: &ApiError) {
    match error {
        ApiError::Unauthorized => {
            eprintln!(
                "{}",
                theme.err("Not authorized: invalid credentials or expired session. Run `inventario login`.")
            );
        }
        ApiError::Validation { .. } => {
            eprintln!("{}", theme.err(&error.to_string()));
            if let Some(fields) = error.field_errors() {
                for (field, messages) in fields {
                    for message in messages {
                        eprintln!("  {} {}", theme.warn(field), message);
                    }
                }
            }
        }
        other => {
            eprintln!("{}", theme.err(&other.to_string()));
        }
    }
}

/// Formats an optional timestamp for table cells.
pub fn date_cell(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    value
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}
