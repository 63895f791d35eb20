//! Display functions for command results

use super::formatters::{create_progress_bar, guesses_word, worst_case_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a password
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}  likeness {}",
            turn,
            step.word.to_uppercase(),
            step.likeness.to_string().bright_cyan()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(worst) = step.worst_case {
                println!("  Worst case: {worst} candidates");
            }
        }
    }

    println!();
    let count = result.guesses.len();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", guesses_word(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} {}", guesses_word(count))
                .red()
                .bold()
        );
    }
}

/// Print the score of every candidate
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} passwords of {} letters ",
        "LIKENESS ANALYSIS:".bright_cyan().bold(),
        result.total_candidates,
        result.word_length.unwrap_or(0)
    );
    println!("{}", "═".repeat(60).cyan());

    let Some(suggestion) = result.suggestion() else {
        println!("\nThere are no passwords to analyze");
        return;
    };

    println!(
        "\n📊 Suggested password: {}",
        suggestion.to_uppercase().bright_yellow().bold()
    );
    println!(
        "\n   {:<12} {:>6} {:>9} {:>9}",
        "password", "worst", "spread", "expected"
    );

    let others = result.total_candidates.saturating_sub(1);
    for (i, row) in result.rows.iter().enumerate() {
        let bar = worst_case_bar(row.worst_case, others, 20);
        let word = if i == 0 {
            format!("{:<12}", row.word).bright_yellow().bold()
        } else {
            format!("{:<12}", row.word).normal()
        };
        println!(
            "   {} {:>6} {:>9} {:>9.2}  {}",
            word,
            row.worst_case,
            row.diversity,
            row.expected_remaining,
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Secrets tested:   {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_secrets.is_empty() {
        println!("\n🐢 {}", "Hardest secrets:".bright_cyan().bold());
        for (secret, guesses) in &result.worst_secrets {
            println!("   {:<12} {guesses}", secret.to_uppercase());
        }
    }
}
