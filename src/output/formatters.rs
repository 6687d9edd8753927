//! Formatting utilities for terminal output

use colored::Colorize;

/// Character position where two words of the same length differ
///
/// Returns the first differing position, or `None` if the words are equal.
#[must_use]
pub fn changed_position(from: &str, to: &str) -> Option<usize> {
    from.chars().zip(to.chars()).position(|(a, b)| a != b)
}

/// Render a word with the letter changed since `previous` highlighted
#[must_use]
pub fn highlight_change(previous: Option<&str>, word: &str) -> String {
    let changed = previous.and_then(|prev| changed_position(prev, word));

    word.chars()
        .enumerate()
        .map(|(i, ch)| {
            if Some(i) == changed {
                ch.to_string().bright_yellow().bold().to_string()
            } else {
                ch.to_string()
            }
        })
        .collect()
}

/// Join a chain into a single line
#[must_use]
pub fn chain_inline(chain: &[String]) -> String {
    chain.join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
