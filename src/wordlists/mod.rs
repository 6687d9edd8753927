//! Word lists for word ladders
//!
//! Word lists are read from plain text files, typically a system dictionary.

pub mod loader;

use crate::core::is_valid;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

pub use loader::{WordListReader, load_all_words, load_words};

/// Word list used when none is given
pub const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";

/// Where a word list lives and how it is cleaned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListSource {
    pub path: PathBuf,
    /// Drop capitalized words and words with apostrophes while loading
    pub filter_invalid: bool,
}

impl WordListSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filter_invalid: true,
        }
    }

    /// Keep every line of the list, valid or not
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.filter_invalid = false;
        self
    }

    /// Predicate applied to each word while loading
    #[must_use]
    pub fn predicate(&self) -> fn(&str) -> bool {
        if self.filter_invalid {
            is_valid
        } else {
            |_| true
        }
    }

    /// Open the word list for reading
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn open(&self) -> io::Result<BufReader<File>> {
        File::open(&self.path).map(BufReader::new)
    }

    /// Start reading the words of `length` characters from this list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened.
    pub fn reader(&self, length: usize) -> io::Result<WordListReader<BufReader<File>>> {
        Ok(WordListReader::new(self.open()?, length).accept(self.predicate()))
    }
}

impl Default for WordListSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_filters() {
        let source = WordListSource::default();
        assert_eq!(source.path, PathBuf::from(DEFAULT_WORDLIST));
        assert!(source.filter_invalid);
        assert!(!(source.predicate())("Paris"));
    }

    #[test]
    fn raw_source_keeps_everything() {
        let source = WordListSource::new("words.txt").raw();
        assert!(!source.filter_invalid);
        assert!((source.predicate())("Paris"));
        assert!((source.predicate())("it's"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = WordListSource::new("/nonexistent/word/list");
        assert_eq!(source.open().unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
