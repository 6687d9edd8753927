//! Word list cleanup command
//!
//! Copies a word list, dropping proper nouns and words with apostrophes.

use crate::core::is_valid;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Counts from a cleanup run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    pub read: usize,
    pub kept: usize,
}

impl CleanupStats {
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.read - self.kept
    }
}

/// Copy every valid word of `input` to `output`, one per line
///
/// # Errors
///
/// Returns an I/O error if the input is not valid UTF-8 or if reading or
/// writing fails.
pub fn run_cleanup<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<CleanupStats> {
    let mut stats = CleanupStats::default();

    for line in input.lines() {
        let word = line?;
        stats.read += 1;
        if is_valid(&word) {
            writeln!(output, "{word}")?;
            stats.kept += 1;
        }
    }
    output.flush()?;

    info!(
        read = stats.read,
        kept = stats.kept,
        dropped = stats.dropped(),
        "word list cleaned"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn cleanup(input: &str) -> (String, CleanupStats) {
        let mut output = Vec::new();
        let stats = run_cleanup(Cursor::new(input), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn drops_invalid_words() {
        let (output, stats) = cleanup("abba\nAltux\nit's\népée\nÉpée\nhELLO\n");

        assert_eq!(output, "abba\népée\nhELLO\n");
        assert_eq!(stats.read, 6);
        assert_eq!(stats.kept, 3);
        assert_eq!(stats.dropped(), 3);
    }

    #[test]
    fn normalizes_line_endings() {
        let (output, _) = cleanup("abba\r\ncold");
        assert_eq!(output, "abba\ncold\n");
    }

    #[test]
    fn empty_input() {
        let (output, stats) = cleanup("");
        assert!(output.is_empty());
        assert_eq!(stats, CleanupStats::default());
    }

    #[test]
    fn invalid_utf8_fails() {
        let mut output = Vec::new();
        let result = run_cleanup(Cursor::new(b"ab\n\xff\n".to_vec()), &mut output);
        assert!(result.is_err());
    }
}
