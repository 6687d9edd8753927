//! Core domain types for word ladders
//!
//! This module contains the fundamental word-level operations with no I/O.
//! Everything here is pure and deterministic.

mod partition;
mod word;

pub use partition::{Partition, partitions};
pub use word::{is_valid, word_len};
