//! Command implementations

pub mod benchmark;
pub mod cleanup;
pub mod ladder;
pub mod neighbors;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use cleanup::{CleanupStats, run_cleanup};
pub use ladder::{LadderConfig, LadderError, LadderResult, WordGraph, build_graph, find_ladder};
pub use neighbors::{NeighborsResult, find_neighbors};
pub use simple::{LadderSession, run_simple};
