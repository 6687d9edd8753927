//! Word ladder command
//!
//! Finds the shortest chain from a start word to an end word using the words
//! of a word list.

use crate::core::word_len;
use crate::ladder::{ChainFinder, NoTransformation, Relations, RelationsBuilder};
use crate::wordlists::{WordListReader, WordListSource};
use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::info;

/// Configuration for finding a ladder
pub struct LadderConfig {
    pub start: String,
    pub end: String,
    pub source: WordListSource,
}

impl LadderConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>, source: WordListSource) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            source,
        }
    }
}

/// Result of a successful ladder search
#[derive(Debug)]
pub struct LadderResult {
    pub start: String,
    pub end: String,
    pub chain: Vec<String>,
    /// Number of words of the right length in the word list
    pub word_count: usize,
}

impl LadderResult {
    /// Number of letter changes along the chain
    #[must_use]
    pub fn steps(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }
}

/// Errors reported by the word list commands
#[derive(Debug)]
pub enum LadderError {
    /// Start and end words do not have the same number of letters
    LengthMismatch { start: String, end: String },
    /// The word list could not be read
    WordList { path: PathBuf, source: io::Error },
    /// Words absent from the word list
    UnknownWords(Vec<String>),
    /// Both words are listed but not connected
    NoTransformation(NoTransformation<String>),
}

impl fmt::Display for LadderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { start, end } => write!(
                f,
                "'{start}' and '{end}' must have the same length ({} and {} letters)",
                word_len(start),
                word_len(end)
            ),
            Self::WordList { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
            Self::UnknownWords(words) => {
                for (i, word) in words.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "word not in list: {word}")?;
                }
                Ok(())
            }
            Self::NoTransformation(e) => write!(f, "{e}"),
        }
    }
}

// Messages already carry the inner error, reports must not repeat it
impl std::error::Error for LadderError {}

impl From<NoTransformation<String>> for LadderError {
    fn from(e: NoTransformation<String>) -> Self {
        Self::NoTransformation(e)
    }
}

/// Relations built from one pass over a word list
pub struct WordGraph {
    pub relations: Relations,
    /// Required words that were not in the list
    pub missing: Vec<String>,
}

/// Connect every word yielded by `words` and collect the missing required words
///
/// # Errors
///
/// Returns an I/O error if the word list cannot be read or is not valid UTF-8.
pub fn build_graph<R: BufRead>(mut words: WordListReader<R>) -> io::Result<WordGraph> {
    let mut builder = RelationsBuilder::new();
    for word in words.by_ref() {
        builder.connect(&word?);
    }
    let missing = words.finish()?;

    Ok(WordGraph {
        relations: builder.relations(),
        missing,
    })
}

/// Check that both words have the same length and return it
///
/// # Errors
///
/// Returns `LadderError::LengthMismatch` if the lengths differ.
pub fn check_lengths(start: &str, end: &str) -> Result<usize, LadderError> {
    let length = word_len(start);
    if length == word_len(end) {
        Ok(length)
    } else {
        Err(LadderError::LengthMismatch {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

/// Find the shortest ladder using the word list named in the configuration
///
/// # Errors
///
/// Returns an error if:
/// - The start and end words have different lengths (checked before reading)
/// - The word list cannot be opened or read
/// - The start or end word is not in the word list
/// - No chain connects the two words
pub fn find_ladder(config: &LadderConfig) -> Result<LadderResult, LadderError> {
    check_lengths(&config.start, &config.end)?;
    let reader = config
        .source
        .open()
        .map_err(|source| word_list_error(config, source))?;
    find_ladder_in(reader, config)
}

/// Find the shortest ladder using the word list read from `reader`
///
/// The configured source only supplies the filtering policy and the path
/// used in error messages.
///
/// # Errors
///
/// Same as [`find_ladder`].
pub fn find_ladder_in<R: BufRead>(
    reader: R,
    config: &LadderConfig,
) -> Result<LadderResult, LadderError> {
    let length = check_lengths(&config.start, &config.end)?;

    let words = WordListReader::new(reader, length)
        .accept(config.source.predicate())
        .require([config.start.as_str(), config.end.as_str()]);
    let graph = build_graph(words).map_err(|source| word_list_error(config, source))?;

    if !graph.missing.is_empty() {
        return Err(LadderError::UnknownWords(graph.missing));
    }

    info!(
        words = graph.relations.len(),
        start = %config.start,
        end = %config.end,
        "searching ladder"
    );
    let chain = ChainFinder::new(&graph.relations).find_chain(&config.start, &config.end)?;

    Ok(LadderResult {
        start: config.start.clone(),
        end: config.end.clone(),
        chain,
        word_count: graph.relations.len(),
    })
}

fn word_list_error(config: &LadderConfig, source: io::Error) -> LadderError {
    LadderError::WordList {
        path: config.source.path.clone(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WORDS: &str = "cold\ncord\ncard\nward\nwarm\nCord\nworm\nword\nlamp\nlimp\n";

    fn config(start: &str, end: &str) -> LadderConfig {
        LadderConfig::new(start, end, WordListSource::new("words.txt"))
    }

    #[test]
    fn finds_shortest_ladder() {
        let result = find_ladder_in(Cursor::new(WORDS), &config("cold", "warm")).unwrap();

        assert_eq!(result.chain.first().map(String::as_str), Some("cold"));
        assert_eq!(result.chain.last().map(String::as_str), Some("warm"));
        assert_eq!(result.chain.len(), 5);
        assert_eq!(result.steps(), 4);
        assert_eq!(result.word_count, 9); // "Cord" filtered out
    }

    #[test]
    fn same_word_is_a_one_word_ladder() {
        let result = find_ladder_in(Cursor::new(WORDS), &config("cold", "cold")).unwrap();
        assert_eq!(result.chain, ["cold"]);
        assert_eq!(result.steps(), 0);
    }

    #[test]
    fn length_mismatch_is_rejected_before_reading() {
        // Invalid UTF-8 would fail if the list were read
        let input = Cursor::new(b"\xff\n".to_vec());
        let err = find_ladder_in(input, &config("cold", "warmth")).unwrap_err();
        assert!(matches!(err, LadderError::LengthMismatch { .. }));
        assert_eq!(
            err.to_string(),
            "'cold' and 'warmth' must have the same length (4 and 6 letters)"
        );
    }

    #[test]
    fn unknown_words_are_reported_individually() {
        let err = find_ladder_in(Cursor::new(WORDS), &config("cold", "wasp")).unwrap_err();
        match &err {
            LadderError::UnknownWords(words) => assert_eq!(words, &["wasp"]),
            other => panic!("unexpected error: {other}"),
        }

        let err = find_ladder_in(Cursor::new(WORDS), &config("bolt", "wasp")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "word not in list: bolt\nword not in list: wasp"
        );
    }

    #[test]
    fn filtered_words_are_unknown() {
        let err = find_ladder_in(Cursor::new(WORDS), &config("Cord", "cord")).unwrap_err();
        assert!(matches!(err, LadderError::UnknownWords(_)));
    }

    #[test]
    fn raw_source_keeps_filtered_words() {
        let config = LadderConfig::new("Cord", "cord", WordListSource::new("words.txt").raw());
        let result = find_ladder_in(Cursor::new(WORDS), &config).unwrap();
        assert_eq!(result.chain, ["Cord", "cord"]);
    }

    #[test]
    fn disconnected_words_have_no_transformation() {
        let err = find_ladder_in(Cursor::new(WORDS), &config("cold", "lamp")).unwrap_err();
        assert!(matches!(err, LadderError::NoTransformation(_)));
        assert_eq!(
            err.to_string(),
            "no transformation possible from 'cold' to 'lamp'"
        );
    }

    #[test]
    fn unreadable_list_names_the_path() {
        let input = Cursor::new(b"cold\n\xff\n".to_vec());
        let err = find_ladder_in(input, &config("cold", "cord")).unwrap_err();
        assert!(matches!(err, LadderError::WordList { .. }));
        assert!(err.to_string().starts_with("cannot read word list words.txt"));
    }

    #[test]
    fn missing_file_is_a_word_list_error() {
        let config = LadderConfig::new(
            "cold",
            "warm",
            WordListSource::new("/nonexistent/word/list"),
        );
        let err = find_ladder(&config).unwrap_err();
        assert!(matches!(err, LadderError::WordList { .. }));
    }

    #[test]
    fn error_reports_state_the_cause_once() {
        let err = find_ladder_in(Cursor::new(WORDS), &config("cold", "lamp")).unwrap_err();
        let report = format!("{:?}", anyhow::Error::from(err));
        assert_eq!(report.matches("no transformation possible").count(), 1);

        let config = LadderConfig::new("cold", "warm", WordListSource::new("/nonexistent/x"));
        let err = find_ladder(&config).unwrap_err();
        let message = err.to_string();
        let report = format!("{:?}", anyhow::Error::from(err));
        assert!(report.starts_with(&message));
        assert_eq!(report.matches("No such file").count(), 1);
        assert!(!report.contains("Caused by"));
    }

    #[test]
    fn check_lengths_counts_characters() {
        assert_eq!(check_lengths("épée", "epee").unwrap(), 4);
        assert!(check_lengths("ab", "abc").is_err());
    }

    #[test]
    fn build_graph_reports_missing() {
        let words = WordListReader::new(Cursor::new("ab\nac\n"), 2).require(["ab", "zz"]);
        let graph = build_graph(words).unwrap();
        assert_eq!(graph.relations.len(), 2);
        assert_eq!(graph.missing, ["zz"]);
    }
}
