//! Display functions for command results

use super::formatters::{code_to_pegs, create_progress_bar, score_to_pins};
use crate::commands::BenchmarkResult;
use crate::session::{Outcome, SessionReport};
use colored::Colorize;

/// Print every round of a game and how it ended
pub fn print_session_report(report: &SessionReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for record in &report.rounds {
        let pins = score_to_pins(record.response.score);
        println!(
            "Round {:>2}: {}  {}",
            record.round,
            code_to_pegs(record.guess),
            pins.bright_white().bold()
        );

        if verbose {
            println!(
                "          word {:#06x}  response {:#04x}",
                record.guess.word(),
                record.response.to_byte()
            );
        }
    }

    println!("{}", "─".repeat(60).cyan());

    let rounds = report.round_count();
    let summary = match report.outcome {
        Outcome::Won => format!(
            "✅ Solved in {rounds} {}!",
            if rounds == 1 { "round" } else { "rounds" }
        )
        .green()
        .bold(),
        Outcome::ParityError => format!("❌ Arbiter reported a parity error after {rounds} rounds")
            .red()
            .bold(),
        Outcome::Lost => format!("❌ Game lost after {rounds} rounds").red().bold(),
        Outcome::MultipleErrors => {
            format!("❌ Parity error and game lost after {rounds} rounds")
                .red()
                .bold()
        }
    };
    println!("{summary}");
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult, strategy: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {strategy}");
    println!("   Games played:     {}", result.total_games);
    println!("   Games won:        {}", result.won);
    if result.failed > 0 {
        println!("   Games lost:       {}", format!("{}", result.failed).red());
    }
    if result.aborted > 0 {
        println!("   Games aborted:    {}", format!("{}", result.aborted).red());
    }
    println!(
        "   Average rounds:   {} (won games)",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {rounds:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
