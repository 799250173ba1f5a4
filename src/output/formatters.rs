//! Formatting utilities for terminal output

use crate::core::Mark;
use crate::game::KeyHint;
use chrono::TimeDelta;
use colored::{ColoredString, Colorize};

/// A board tile: the letter on a background for its mark
#[must_use]
pub fn tile(letter: &str, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Some(Mark::Correct) => text.black().on_green().bold(),
        Some(Mark::Misplaced) => text.black().on_yellow().bold(),
        Some(Mark::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// A keyboard key for what is known about its letter
#[must_use]
pub fn key(letter: char, hint: Option<KeyHint>) -> ColoredString {
    let text = letter.to_string();
    match hint {
        Some(KeyHint::Known(mark)) => tile(&text, Some(mark)),
        // one variant ruled out, the other untested
        Some(KeyHint::Uncertain) => format!(" {letter} ").black().on_bright_white(),
        None => format!(" {letter} ").normal(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `HH:MM:SS`, negative durations shown as zero
#[must_use]
pub fn format_remaining(remaining: TimeDelta) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, secs % 3600 / 60, secs % 60)
}
