//! Relations between words of a word list
//!
//! Two words are related when one becomes the other by changing a single
//! letter. Instead of comparing every pair of words, each word is filed under
//! each of its partitions: words filed under the same partition are related.

use crate::core::{Partition, partitions};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Adjacency mapping from a word to every word it is related to
///
/// Neighbour sets are ordered so that searches over the mapping visit
/// neighbours in a reproducible order.
pub type Relations<T = String> = FxHashMap<T, BTreeSet<T>>;

/// Incrementally constructs the relations between a set of words
///
/// Words are added one at a time with [`connect`](Self::connect). The
/// adjacency mapping is derived on demand by [`relations`](Self::relations)
/// and never shares storage with the builder.
#[derive(Debug, Default, Clone)]
pub struct RelationsBuilder {
    classes: FxHashMap<Partition, BTreeSet<String>>,
}

impl RelationsBuilder {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with every given word already connected
    ///
    /// # Examples
    /// ```
    /// use word_ladder::ladder::RelationsBuilder;
    ///
    /// let builder = RelationsBuilder::from_words(["cold", "cord", "card"]);
    /// let relations = builder.relations();
    ///
    /// assert!(relations["cord"].contains("cold"));
    /// assert!(relations["cord"].contains("card"));
    /// assert!(!relations["cold"].contains("card"));
    /// ```
    pub fn from_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = Self::new();
        builder.extend(words);
        builder
    }

    /// File a word under each of its partitions
    ///
    /// Connecting the same word twice has no further effect. A word without
    /// letters has no partition and never shows up in the relations.
    pub fn connect(&mut self, word: &str) {
        for partition in partitions(word) {
            trace!(%partition, word, "filing word");
            // Group together the words having a common partition
            self.classes
                .entry(partition)
                .or_default()
                .insert(word.to_string());
        }
    }

    /// Build the adjacency mapping of every word connected so far
    ///
    /// Each word is related to itself and to every word sharing one of its
    /// partitions. The result only depends on the set of connected words, not
    /// on the order they were connected in.
    #[must_use]
    pub fn relations(&self) -> Relations {
        let mut graph = Relations::default();
        for class in self.classes.values() {
            for word in class {
                graph
                    .entry(word.clone())
                    .or_default()
                    .extend(class.iter().cloned());
            }
        }

        debug!(
            words = graph.len(),
            partitions = self.partition_count(),
            "built word relations"
        );
        graph
    }

    /// Number of distinct partitions seen so far
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of distinct words that have at least one partition
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.classes
            .values()
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }
}

impl<S: AsRef<str>> Extend<S> for RelationsBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.connect(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for RelationsBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        Self::from_words(words)
    }
}
