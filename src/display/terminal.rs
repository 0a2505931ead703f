//! TTY detection, color support logic, and screen clearing

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, IsTerminal};

use crate::error::Result;

/// Determine if colors should be used based on environment and TTY status.
///
/// Decided once at startup and passed into the clock loop; escape sequences
/// are only ever emitted when this returned true.
pub fn should_use_colors() -> bool {
    // NO_COLOR takes precedence (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // CLICOLOR_FORCE enables colors even when piped
    if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if val != "0" {
            return true;
        }
    }

    // CLICOLOR=0 disables colors
    if let Ok(val) = std::env::var("CLICOLOR") {
        if val == "0" {
            return false;
        }
    }

    io::stdout().is_terminal()
}

/// Clear the terminal viewport and home the cursor.
pub fn clear_screen() -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
