//! Word ladder algorithms
//!
//! Relations between words are built first, then searched for the shortest
//! chain between two words.

pub mod finder;
pub mod relations;

pub use finder::{ChainFinder, ChainWalk, NoTransformation, Trail};
pub use relations::{Relations, RelationsBuilder};
