//! Word list loading utilities
//!
//! A word list is a UTF-8 text with one word per line. Lines are read in a
//! single pass, keeping the words of one length or of every length.

use crate::core::word_len;
use std::io::{self, BufRead};
use tracing::debug;

/// Reads the words of a given length, or of any length, from a word list
///
/// Line terminators are stripped, nothing else. Words can optionally be
/// screened with an acceptance predicate before the length check, and the
/// reader can watch for required words while iterating.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use word_ladder::core::is_valid;
/// use word_ladder::wordlists::loader::WordListReader;
///
/// let input = Cursor::new("cold\nCork\ncord\nwarmth\n");
/// let mut reader = WordListReader::new(input, 4)
///     .accept(is_valid)
///     .require(["cold", "warm"]);
///
/// let words: Vec<String> = reader.by_ref().collect::<Result<_, _>>().unwrap();
/// assert_eq!(words, ["cold", "cord"]);
/// assert_eq!(reader.finish().unwrap(), ["warm"]);
/// ```
pub struct WordListReader<R> {
    lines: io::Lines<R>,
    length: Option<usize>,
    accept: fn(&str) -> bool,
    required: Vec<(String, bool)>,
    read: usize,
    kept: usize,
}

impl<R: BufRead> WordListReader<R> {
    /// Create a reader keeping the words of `length` characters
    pub fn new(reader: R, length: usize) -> Self {
        Self::with_length(reader, Some(length))
    }

    /// Create a reader keeping words of every length
    pub fn any_length(reader: R) -> Self {
        Self::with_length(reader, None)
    }

    fn with_length(reader: R, length: Option<usize>) -> Self {
        Self {
            lines: reader.lines(),
            length,
            accept: |_| true,
            required: Vec::new(),
            read: 0,
            kept: 0,
        }
    }

    /// Only keep the words for which `predicate` holds
    #[must_use]
    pub fn accept(mut self, predicate: fn(&str) -> bool) -> Self {
        self.accept = predicate;
        self
    }

    /// Watch for words that must appear in the list
    ///
    /// Duplicates are watched once.
    #[must_use]
    pub fn require<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for word in words {
            let word = word.into();
            if !self.required.iter().any(|(w, _)| *w == word) {
                self.required.push((word, false));
            }
        }
        self
    }

    /// Finish the pass and return the required words that never appeared
    ///
    /// Any line not read yet is read first, so the answer covers the whole
    /// list. Missing words are returned in the order they were required.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the remaining input cannot be read or is not
    /// valid UTF-8.
    pub fn finish(mut self) -> io::Result<Vec<String>> {
        for word in self.by_ref() {
            word?;
        }

        debug!(
            lines = self.read,
            kept = self.kept,
            length = ?self.length,
            "word list read"
        );

        Ok(self
            .required
            .into_iter()
            .filter(|(_, seen)| !seen)
            .map(|(word, _)| word)
            .collect())
    }

    fn keeps(&self, word: &str) -> bool {
        (self.accept)(word) && self.length.is_none_or(|length| word_len(word) == length)
    }
}

impl<R: BufRead> Iterator for WordListReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let word = match self.lines.next()? {
                Ok(word) => word,
                Err(e) => return Some(Err(e)),
            };
            self.read += 1;

            if !self.keeps(&word) {
                continue;
            }
            self.kept += 1;

            if let Some((_, seen)) = self.required.iter_mut().find(|(w, _)| *w == word) {
                *seen = true;
            }
            return Some(Ok(word));
        }
    }
}

/// Load every word of `length` characters accepted by `accept`
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or is not valid UTF-8.
pub fn load_words<R: BufRead>(
    reader: R,
    length: usize,
    accept: fn(&str) -> bool,
) -> io::Result<Vec<String>> {
    WordListReader::new(reader, length).accept(accept).collect()
}

/// Load every word accepted by `accept`, whatever its length
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read or is not valid UTF-8.
pub fn load_all_words<R: BufRead>(reader: R, accept: fn(&str) -> bool) -> io::Result<Vec<String>> {
    WordListReader::any_length(reader).accept(accept).collect()
}
