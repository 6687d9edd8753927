//! Word Ladder - CLI
//!
//! Shortest word ladders, word neighbors and word list cleanup.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use word_ladder::{
    commands::{
        LadderConfig, LadderError, build_graph, find_ladder, find_neighbors, run_benchmark,
        run_cleanup, run_simple,
    },
    output::{print_benchmark_result, print_ladder_result, print_neighbors},
    wordlists::{DEFAULT_WORDLIST, WordListSource},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Turn one word into another, one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: one word per line, UTF-8
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "WORD_LADDER_WORDLIST",
        default_value = DEFAULT_WORDLIST
    )]
    wordlist: PathBuf,

    /// Keep capitalized words and words with apostrophes
    #[arg(long, global = true)]
    raw: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest ladder between two words
    Ladder {
        /// Word to start from
        start: String,

        /// Word to reach, same length as START
        end: String,

        /// Number the steps and highlight changed letters
        #[arg(short, long)]
        pretty: bool,
    },

    /// List the words one letter away from a word
    Neighbors {
        /// The word to look up
        word: String,
    },

    /// Remove capitalized words and words with apostrophes from a word list
    Cleanup {
        /// Word list to clean (standard input if omitted)
        input: Option<PathBuf>,
    },

    /// Search ladders between random pairs of words
    Benchmark {
        /// Number of random pairs to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Length of the words to pick
        #[arg(short, long, default_value = "4")]
        length: usize,

        /// Seed for reproducible pairs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Interactive mode answering ladder queries
    Simple,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut source = WordListSource::new(&cli.wordlist);
    if cli.raw {
        source = source.raw();
    }

    match cli.command {
        Commands::Ladder { start, end, pretty } => run_ladder_command(start, end, pretty, source),
        Commands::Neighbors { word } => {
            let result = find_neighbors(&word, &source)?;
            print_neighbors(&result);
            Ok(())
        }
        Commands::Cleanup { input } => run_cleanup_command(input.as_deref()),
        Commands::Benchmark {
            count,
            length,
            seed,
        } => run_benchmark_command(count, length, seed, &source),
        Commands::Simple => run_simple(&source),
    }
}

fn run_ladder_command(
    start: String,
    end: String,
    pretty: bool,
    source: WordListSource,
) -> Result<()> {
    let config = LadderConfig::new(start, end, source);

    match find_ladder(&config).map_err(classify_ladder_error) {
        Ok(result) => {
            print_ladder_result(&result, pretty);
            Ok(())
        }
        Err(LadderFailure::Usage(e)) => e.exit(),
        Err(LadderFailure::Fatal(e)) => Err(e),
    }
}

/// How a failed ladder search ends the process
enum LadderFailure {
    /// Bad arguments, reported by clap with status 2
    Usage(clap::Error),
    /// Returned from `main`, status 1
    Fatal(anyhow::Error),
}

fn classify_ladder_error(err: LadderError) -> LadderFailure {
    match err {
        // Reported like any other usage error
        e @ LadderError::LengthMismatch { .. } => {
            LadderFailure::Usage(Cli::command().error(ErrorKind::ValueValidation, e))
        }
        e => LadderFailure::Fatal(e.into()),
    }
}

fn run_cleanup_command(input: Option<&Path>) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let stats = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot read {}", path.display()))?;
            run_cleanup(BufReader::new(file), &mut stdout)?
        }
        None => run_cleanup(io::stdin().lock(), &mut stdout)?,
    };

    info!(kept = stats.kept, read = stats.read, "cleanup done");
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    length: usize,
    seed: Option<u64>,
    source: &WordListSource,
) -> Result<()> {
    let reader = source
        .reader(length)
        .with_context(|| format!("cannot read word list {}", source.path.display()))?;
    let graph = build_graph(reader)
        .with_context(|| format!("cannot read word list {}", source.path.display()))?;

    println!("Running benchmark on {count} random pairs of {length}-letter words...");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let result = run_benchmark(&graph.relations, count, &mut rng, true);
    print_benchmark_result(&result);
    Ok(())
}
