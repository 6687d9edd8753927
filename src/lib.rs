//! Word Ladder
//!
//! Finds the shortest chain of words turning one word into another by
//! changing one letter at a time, every intermediate step being a word of
//! the dictionary.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::ladder::{ChainFinder, RelationsBuilder};
//!
//! // Relate the words that differ by one letter
//! let relations = RelationsBuilder::from_words(["cat", "cot", "cog", "dog"]).relations();
//!
//! // Search the shortest chain
//! let finder = ChainFinder::new(&relations);
//! let chain = finder.find_chain(&"cat".to_string(), &"dog".to_string()).unwrap();
//! assert_eq!(chain, ["cat", "cot", "cog", "dog"]);
//! ```

// Core word operations
pub mod core;

// Relations and chain search
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
