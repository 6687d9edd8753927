//! Display functions for command results

use super::formatters::{chain_inline, create_progress_bar, highlight_change};
use crate::commands::{BenchmarkResult, LadderResult, NeighborsResult};
use colored::Colorize;

/// Print a chain one word per line, nothing else
///
/// This is the default output, meant to be piped into other tools.
pub fn print_chain(chain: &[String]) {
    for word in chain {
        println!("{word}");
    }
}

/// Print a chain with numbered steps and each changed letter highlighted
pub fn print_chain_pretty(chain: &[String]) {
    println!();
    let mut previous: Option<&str> = None;
    for (i, word) in chain.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{i:>2}.").bright_black(),
            highlight_change(previous, word)
        );
        previous = Some(word.as_str());
    }
}

/// Print the result of a ladder search
pub fn print_ladder_result(result: &LadderResult, pretty: bool) {
    if !pretty {
        print_chain(&result.chain);
        return;
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.bright_yellow().bold(),
        result.end.bright_yellow().bold()
    );
    println!(
        "{}",
        format!("Searched {} words", result.word_count).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    print_chain_pretty(&result.chain);

    let steps = result.steps();
    println!(
        "\n  {}\n",
        format!(
            "✅ {} {}",
            steps,
            if steps == 1 { "step" } else { "steps" }
        )
        .green()
        .bold()
    );
}

/// Print the neighbors of a word, one per line
pub fn print_neighbors(result: &NeighborsResult) {
    for word in &result.neighbors {
        println!("{word}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words:            {}", result.word_count);
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!("   No ladder:        {}", format!("{}", result.failed).yellow());
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_length)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {}", chain_inline(longest));
    }

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&length, &count) in &result.distribution {
        let pct = (count as f64 / result.found as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
