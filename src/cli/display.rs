//! Display utilities for the Pomodoro Timer CLI.
//!
//! Everything here goes to stderr so stdout carries only the timer output.

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("{}", Self::error_line(message));
    }

    /// Shows the error together with its context chain.
    pub fn show_anyhow(error: &anyhow::Error) {
        Self::show_error(&format!("{:#}", error));
    }

    fn error_line(message: &str) -> String {
        format!("エラー: {}", message)
    }
}

// ============================================================================
// Tests
// ============================================================================
