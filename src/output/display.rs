//! Display functions for command results

use super::formatters::{colored_code, create_progress_bar, feedback_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving one secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let rules = result.secret.rules();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}  ({rules})", colored_code(&result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_code(&step.guess),
            feedback_to_pegs(step.feedback, rules)
        );

        if verbose {
            println!(
                "  Feedback:   {} exact, {} color only",
                step.feedback.exact(),
                step.feedback.color_only()
            );
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds_played())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", result.rounds_played())
                .red()
                .bold()
        );
    }
}

/// Print the feedback partition of a code
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        colored_code(&result.code)
    );
    println!("{}", "═".repeat(60).cyan());

    let rules = result.code.rules();
    println!("\n📊 Against all {} codes:", result.total_candidates);
    for &(feedback, count) in &result.partitions {
        let bar = create_progress_bar(count as f64, result.worst_case as f64, 30);
        println!(
            "   {}  [{}] {count:5}",
            feedback_to_pegs(feedback, rules),
            bar.green()
        );
    }

    println!(
        "\n   Worst case:  {}",
        format!("{} codes remain", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} codes remain",
        result.expected_remaining
    );

    let (best, best_worst) = result.best;
    if best == result.code {
        println!("   {}", "This is the minimax opening.".green());
    } else {
        println!(
            "   Minimax:     {} leaves at most {best_worst}",
            colored_code(&best)
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    if result.failed() > 0 {
        println!(
            "   Not solved:       {}",
            result.failed().to_string().red()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = count as f64 / result.total_games.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {rounds:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
