//! Simple interactive CLI mode
//!
//! Answers ladder queries typed on the terminal. The word list is read once
//! and the relations for each word length are built on first use.

use super::ladder::{LadderError, LadderResult, check_lengths};
use crate::core::word_len;
use crate::ladder::{ChainFinder, Relations, RelationsBuilder};
use crate::output::print_ladder_result;
use crate::wordlists::{WordListSource, load_all_words};
use anyhow::{Context, Result};
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Word list held in memory with relations cached per word length
pub struct LadderSession {
    words: Vec<String>,
    relations: FxHashMap<usize, Relations>,
}

impl LadderSession {
    /// Read every word accepted by `accept` from `reader`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the input cannot be read or is not valid UTF-8.
    pub fn from_reader<R: BufRead>(reader: R, accept: fn(&str) -> bool) -> io::Result<Self> {
        Ok(Self {
            words: load_all_words(reader, accept)?,
            relations: FxHashMap::default(),
        })
    }

    /// Number of words held, all lengths together
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Find the shortest chain between two words of the list
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch`, `UnknownWords` or `NoTransformation` the same
    /// way the ladder command does.
    pub fn query(&mut self, start: &str, end: &str) -> Result<LadderResult, LadderError> {
        let length = check_lengths(start, end)?;
        let relations = self.relations_for(length);

        let mut missing: Vec<String> = Vec::new();
        for word in [start, end] {
            if !relations.contains_key(word) && !missing.iter().any(|w| w == word) {
                missing.push(word.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(LadderError::UnknownWords(missing));
        }

        let chain = ChainFinder::new(relations).find_chain(&start.to_string(), &end.to_string())?;

        Ok(LadderResult {
            start: start.to_string(),
            end: end.to_string(),
            chain,
            word_count: relations.len(),
        })
    }

    fn relations_for(&mut self, length: usize) -> &Relations {
        let words = &self.words;
        self.relations.entry(length).or_insert_with(|| {
            let builder: RelationsBuilder =
                words.iter().filter(|w| word_len(w) == length).collect();
            debug!(length, words = builder.word_count(), "relations cached");
            builder.relations()
        })
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list cannot be read or if there's an I/O
/// error reading user input.
pub fn run_simple(source: &WordListSource) -> Result<()> {
    let reader = source
        .open()
        .with_context(|| format!("cannot read word list {}", source.path.display()))?;
    let mut session = LadderSession::from_reader(reader, source.predicate())
        .with_context(|| format!("cannot read word list {}", source.path.display()))?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Ladder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Loaded {} words from {}",
        session.word_count().to_string().bright_cyan(),
        source.path.display()
    );
    println!("Enter a start word and an end word of the same length.");
    println!("Commands: 'quit' to exit\n");

    loop {
        let Some(start) = get_user_input("Start word")? else {
            break;
        };
        if start.is_empty() {
            continue;
        }
        let Some(end) = get_user_input("End word")? else {
            break;
        };

        match session.query(&start, &end) {
            Ok(result) => print_ladder_result(&result, true),
            Err(e) => println!("\n{}\n", e.to_string().red()),
        }
    }

    println!("\n👋 Bye!\n");
    Ok(())
}

/// Get user input with a prompt
///
/// Returns `None` at end of input or when the user asks to quit.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let input = input.trim();
    if matches!(input, "quit" | "exit") {
        return Ok(None);
    }
    Ok(Some(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_valid;
    use std::io::Cursor;

    const WORDS: &str = "cold\ncord\ncard\nward\nwarm\nab\nac\nbc\nParis\n";

    fn session() -> LadderSession {
        LadderSession::from_reader(Cursor::new(WORDS), is_valid).unwrap()
    }

    #[test]
    fn loads_valid_words_of_all_lengths() {
        assert_eq!(session().word_count(), 8);
    }

    #[test]
    fn answers_queries_of_different_lengths() {
        let mut session = session();

        assert_eq!(
            session.query("cold", "warm").unwrap().chain,
            ["cold", "cord", "card", "ward", "warm"]
        );
        assert_eq!(session.query("ab", "bc").unwrap().chain, ["ab", "ac", "bc"]);
        assert_eq!(session.relations.len(), 2);
    }

    #[test]
    fn results_count_words_of_the_query_length() {
        let mut session = session();

        let result = session.query("cold", "warm").unwrap();
        assert_eq!(result.word_count, 5);
        assert_eq!(result.steps(), 4);

        let result = session.query("ab", "ab").unwrap();
        assert_eq!(result.word_count, 3);
        assert_eq!(result.steps(), 0);
    }

    #[test]
    fn relations_are_built_once_per_length() {
        let mut session = session();
        session.query("cold", "warm").unwrap();
        session.query("warm", "cold").unwrap();
        assert_eq!(session.relations.len(), 1);
    }

    #[test]
    fn reports_each_error_kind() {
        let mut session = session();

        assert!(matches!(
            session.query("cold", "ab"),
            Err(LadderError::LengthMismatch { .. })
        ));
        assert!(matches!(
            session.query("Paris", "paris"),
            Err(LadderError::UnknownWords(words)) if words == ["Paris", "paris"]
        ));
        assert!(matches!(
            session.query("wasp", "wasp"),
            Err(LadderError::UnknownWords(words)) if words == ["wasp"]
        ));
    }

    #[test]
    fn disconnected_words() {
        let session_words = "cold\ncord\nlamp\n";
        let mut session = LadderSession::from_reader(Cursor::new(session_words), is_valid).unwrap();

        assert!(matches!(
            session.query("cold", "lamp"),
            Err(LadderError::NoTransformation(_))
        ));
    }
}
