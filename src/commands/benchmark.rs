//! Benchmark command
//!
//! Runs the chain finder on random pairs of words and collects statistics.

use crate::ladder::{ChainFinder, Relations};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub word_count: usize,
    pub total_pairs: usize,
    pub found: usize,
    pub failed: usize,
    /// Average number of words per chain found
    pub average_length: f64,
    pub longest: Option<Vec<String>>,
    /// Number of chains found for each chain length
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

/// Search chains between `count` random pairs of related words
///
/// Pairs are drawn with replacement from the words of `relations`, in a
/// fixed order, so a seeded `rng` gives reproducible runs.
pub fn run_benchmark<G: Rng + ?Sized>(
    relations: &Relations,
    count: usize,
    rng: &mut G,
    show_progress: bool,
) -> BenchmarkResult {
    let mut words: Vec<&String> = relations.keys().collect();
    words.sort();

    let total_pairs = if words.is_empty() { 0 } else { count };
    let pb = if show_progress {
        ProgressBar::new(total_pairs as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let finder = ChainFinder::new(relations);
    let mut found = 0;
    let mut total_length = 0;
    let mut longest: Option<Vec<String>> = None;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    let start_time = Instant::now();

    for _ in 0..total_pairs {
        let (Some(&start), Some(&end)) = (words.choose(rng), words.choose(rng)) else {
            break;
        };

        if let Ok(chain) = finder.find_chain(start, end) {
            found += 1;
            total_length += chain.len();
            *distribution.entry(chain.len()).or_insert(0) += 1;

            if longest.as_ref().is_none_or(|l| chain.len() > l.len()) {
                longest = Some(chain);
            }
        }

        pb.set_message(format!("Found: {found}"));
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let duration = start_time.elapsed();
    let average_length = if found > 0 {
        total_length as f64 / found as f64
    } else {
        0.0
    };
    let pairs_per_second = if duration.is_zero() {
        0.0
    } else {
        total_pairs as f64 / duration.as_secs_f64()
    };

    BenchmarkResult {
        word_count: words.len(),
        total_pairs,
        found,
        failed: total_pairs - found,
        average_length,
        longest,
        distribution,
        duration,
        pairs_per_second,
    }
}
