//! Formatting utilities for terminal output

use crate::core::{Rejection, letter_count};
use colored::Colorize;

/// Circled numbers for word lengths 1-20
const CIRCLED: [char; 20] = [
    '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱',
    '⑲', '⑳',
];

/// Badge showing how many letters (and points) a word is worth
#[must_use]
pub fn length_badge(word: &str) -> String {
    let length = letter_count(word);
    match length {
        1..=20 => CIRCLED[length - 1].to_string(),
        _ => format!("({length})"),
    }
}

/// Format a rejection as a colored alert line
#[must_use]
pub fn format_rejection(rejection: &Rejection) -> String {
    format!(
        "{} {} {}",
        "❌".red(),
        rejection.title().red().bold(),
        rejection.message().bright_black()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar of a round score against the best possible score, e.g. `███░░ 8/15`
///
/// With no known maximum the bar stays empty.
#[must_use]
pub fn score_bar(score: usize, max_score: usize, width: usize) -> String {
    format!(
        "{} {}",
        create_progress_bar(score, max_score, width).green(),
        format!("{score}/{max_score}").bright_black()
    )
}
