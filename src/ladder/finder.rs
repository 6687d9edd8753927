//! Shortest transformation chains
//!
//! Breadth-first search over a relations mapping. The search starts from the
//! end word and stops as soon as the start word is reached, so the chain is
//! read by following predecessor pointers forward from the start word.

use super::relations::Relations;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use tracing::{debug, trace};

/// Error returned when two words are not connected
///
/// Either word may be missing from the relations, or both may be present in
/// disconnected groups of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoTransformation<T> {
    pub start: T,
    pub end: T,
}

impl<T: fmt::Display> fmt::Display for NoTransformation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no transformation possible from '{}' to '{}'",
            self.start, self.end
        )
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for NoTransformation<T> {}

/// Finds the shortest chain of transformations between two elements
///
/// Works on any element type, the relations only need to be symmetric.
pub struct ChainFinder<'a, T> {
    relations: &'a Relations<T>,
}

impl<'a, T: Eq + Hash + Clone> ChainFinder<'a, T> {
    #[must_use]
    pub const fn new(relations: &'a Relations<T>) -> Self {
        Self { relations }
    }

    /// Find the shortest chain from `start` to `end`, both included
    ///
    /// When several chains share the minimum length, the one found first
    /// while visiting neighbours in ascending order is returned.
    ///
    /// # Errors
    ///
    /// Returns [`NoTransformation`] if `start` cannot be reached from `end`.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::ladder::{ChainFinder, RelationsBuilder};
    ///
    /// let relations = RelationsBuilder::from_words(["cold", "cord", "card", "ward", "warm"])
    ///     .relations();
    /// let finder = ChainFinder::new(&relations);
    ///
    /// let chain = finder.find_chain(&"cold".to_string(), &"warm".to_string()).unwrap();
    /// assert_eq!(chain, ["cold", "cord", "card", "ward", "warm"]);
    /// ```
    pub fn find_chain(&self, start: &T, end: &T) -> Result<Vec<T>, NoTransformation<T>> {
        let trail = self.trail(start, end)?;
        Ok(trail.walk().cloned().collect())
    }

    /// Run the search and keep its predecessor pointers
    ///
    /// The returned [`Trail`] can be walked lazily, as many times as needed.
    ///
    /// # Errors
    ///
    /// Returns [`NoTransformation`] if `start` cannot be reached from `end`.
    pub fn trail(&self, start: &T, end: &T) -> Result<Trail<'a, T>, NoTransformation<T>> {
        let no_transformation = || NoTransformation {
            start: start.clone(),
            end: end.clone(),
        };

        // Unknown words have no relations at all
        let (start, _) = self
            .relations
            .get_key_value(start)
            .ok_or_else(no_transformation)?;
        let (end, _) = self
            .relations
            .get_key_value(end)
            .ok_or_else(no_transformation)?;

        let next_step = self.search(start, end).ok_or_else(no_transformation)?;
        Ok(Trail { start, next_step })
    }

    /// Breadth-first search from `end` until `start` is recorded
    ///
    /// Maps every visited element to the element one step closer to `end`.
    fn search(&self, start: &'a T, end: &'a T) -> Option<FxHashMap<&'a T, Option<&'a T>>> {
        let mut next_step: FxHashMap<&'a T, Option<&'a T>> = FxHashMap::default();
        next_step.insert(end, None);

        // Elements with a known transformation whose relations are unexplored
        let mut frontier = VecDeque::from([end]);

        while !next_step.contains_key(start) {
            let Some(current) = frontier.pop_front() else {
                debug!(visited = next_step.len(), "search exhausted");
                return None;
            };
            let Some(neighbors) = self.relations.get(current) else {
                continue;
            };
            trace!(frontier = frontier.len(), "expanding element");

            for neighbor in neighbors {
                // Ignore elements with a known transformation
                if let Entry::Vacant(slot) = next_step.entry(neighbor) {
                    slot.insert(Some(current));
                    if neighbor == start {
                        break;
                    }
                    frontier.push_back(neighbor);
                }
            }
        }

        debug!(visited = next_step.len(), "search reached start");
        Some(next_step)
    }
}

/// Result of a successful search
///
/// Holds the predecessor pointers found by the search, from which the chain
/// is produced one element at a time.
#[derive(Debug, Clone)]
pub struct Trail<'a, T> {
    start: &'a T,
    next_step: FxHashMap<&'a T, Option<&'a T>>,
}

impl<'a, T: Eq + Hash> Trail<'a, T> {
    /// Walk the chain from start to end
    #[must_use]
    pub fn walk(&self) -> ChainWalk<'_, 'a, T> {
        ChainWalk {
            next_step: &self.next_step,
            current: Some(self.start),
        }
    }

    /// Number of elements in the chain, both ends included
    #[must_use]
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// Always false: a chain holds at least its start element
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Iterator over the elements of a chain
pub struct ChainWalk<'t, 'a, T> {
    next_step: &'t FxHashMap<&'a T, Option<&'a T>>,
    current: Option<&'a T>,
}

impl<'a, T: Eq + Hash> Iterator for ChainWalk<'_, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.current?;
        self.current = self.next_step.get(element).copied().flatten();
        Some(element)
    }
}
