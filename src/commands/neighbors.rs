//! Word neighbors command
//!
//! Lists the words one letter away from a given word.

use super::ladder::{LadderError, build_graph};
use crate::core::word_len;
use crate::wordlists::{WordListReader, WordListSource};
use std::io::BufRead;

/// Result of a neighbors lookup
#[derive(Debug)]
pub struct NeighborsResult {
    pub word: String,
    /// Related words in ascending order, the word itself excluded
    pub neighbors: Vec<String>,
}

/// List the neighbors of `word` in the word list named by `source`
///
/// # Errors
///
/// Returns an error if the word list cannot be read or does not contain the word.
pub fn find_neighbors(word: &str, source: &WordListSource) -> Result<NeighborsResult, LadderError> {
    let reader = source.open().map_err(|e| LadderError::WordList {
        path: source.path.clone(),
        source: e,
    })?;
    find_neighbors_in(reader, word, source)
}

/// List the neighbors of `word` in the word list read from `reader`
///
/// # Errors
///
/// Same as [`find_neighbors`].
pub fn find_neighbors_in<R: BufRead>(
    reader: R,
    word: &str,
    source: &WordListSource,
) -> Result<NeighborsResult, LadderError> {
    let words = WordListReader::new(reader, word_len(word))
        .accept(source.predicate())
        .require([word]);
    let graph = build_graph(words).map_err(|e| LadderError::WordList {
        path: source.path.clone(),
        source: e,
    })?;

    if !graph.missing.is_empty() {
        return Err(LadderError::UnknownWords(graph.missing));
    }

    let neighbors = graph
        .relations
        .get(word)
        .map(|related| related.iter().filter(|w| *w != word).cloned().collect())
        .unwrap_or_default();

    Ok(NeighborsResult {
        word: word.to_string(),
        neighbors,
    })
}
