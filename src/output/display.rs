//! Display functions for command results

use super::formatters::{create_progress_bar, format_wrong_guesses};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{GuessOutcome, Outcome};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let verdict = match step.outcome {
            GuessOutcome::Correct { revealed } => format!("+{revealed}").green(),
            GuessOutcome::Incorrect => "miss".red(),
            GuessOutcome::AlreadyGuessed => "repeat".yellow(),
            GuessOutcome::GameOver => "over".bright_black(),
        };

        println!(
            "\nTurn {}: {} {:>6}  {}",
            i + 1,
            step.guess.as_char().to_ascii_uppercase(),
            verdict,
            step.mask
        );

        if verbose {
            println!("  Candidates: {}", step.candidates_before);
        }
    }

    println!(
        "\nWrong guesses: {} ({}/{})",
        format_wrong_guesses(&result.wrong_guesses),
        result.wrong_guesses.len(),
        result.max_attempts
    );

    println!();
    match result.outcome {
        Outcome::Won => println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} wrong",
                result.steps.len(),
                result.wrong_guesses.len()
            )
            .green()
            .bold()
        ),
        Outcome::Lost => println!(
            "{}",
            format!("❌ Hanged after {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy_name: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy_name}");
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Won:              {} {}",
        result.wins,
        format!("({:.1}%)", result.win_rate()).green()
    );
    if result.losses > 0 {
        println!("   Lost:             {}", result.losses.to_string().red());
    }
    println!(
        "   Average wrong:    {}",
        format!("{:.2}", result.average_wrong).bright_yellow().bold()
    );
    println!("   Worst case:       {}", result.max_wrong.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong-guess distribution:".bright_cyan().bold());
    for wrong in 0..=result.max_attempts {
        if let Some(&count) = result.distribution.get(&wrong) {
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {wrong:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Lost on:".red().bold());
        for word in result.failed_words.iter().take(10) {
            println!("   • {word}");
        }
    }
}
