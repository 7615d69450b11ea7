//! Test all secrets - exhaustive breaker evaluation
//!
//! Plays against every code in the universe and generates statistics.

use super::solve::solve_code;
use crate::core::{Code, Rules, universe};
use crate::error::BreakerError;
use crate::output::formatters::{batch_progress, colored_code};
use crate::solver::{Breaker, Strategy};
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from playing every secret
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub round_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    pub hardest: Vec<(Code, usize)>,
    pub unsolved: Vec<Code>,
    pub second_guesses: FxHashMap<Code, usize>,
}

/// Play every secret of the universe in enumeration order (or the first `limit`)
///
/// # Errors
/// Returns the first `BreakerError` raised by any game.
pub fn run_test_all<S: Strategy + Clone>(
    rules: Rules,
    strategy: &S,
    max_rounds: usize,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics, BreakerError> {
    let all = universe(rules);
    let secrets = &all[..limit.unwrap_or(all.len()).min(all.len())];

    log::info!("testing {} secrets with {}", secrets.len(), strategy.name());
    let pb = batch_progress(secrets.len(), show_progress);

    let mut solved_rounds: Vec<(Code, usize)> = Vec::with_capacity(secrets.len());
    let mut unsolved = Vec::new();
    let mut second_guesses: FxHashMap<Code, usize> = FxHashMap::default();
    let total_start = Instant::now();

    for (idx, &secret) in secrets.iter().enumerate() {
        let mut breaker = Breaker::new(all.clone(), strategy.clone())?;
        let result = solve_code(secret, &mut breaker, max_rounds)?;

        if let Some(step) = result.rounds.get(1) {
            *second_guesses.entry(step.guess).or_insert(0) += 1;
        }

        if result.success {
            solved_rounds.push((secret, result.rounds_played()));
        } else {
            unsolved.push(secret);
        }

        if idx % 50 == 0 && !solved_rounds.is_empty() {
            let avg = solved_rounds.iter().map(|(_, n)| n).sum::<usize>() as f64
                / solved_rounds.len() as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let mut round_distribution = BTreeMap::new();
    for (_, rounds) in &solved_rounds {
        *round_distribution.entry(*rounds).or_insert(0) += 1;
    }

    let solved = solved_rounds.len();
    let total_rounds: usize = solved_rounds.iter().map(|(_, n)| n).sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    let max_rounds_seen = solved_rounds.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_rounds = solved_rounds.iter().map(|(_, n)| *n).min().unwrap_or(0);

    let mut hardest: Vec<(Code, usize)> = solved_rounds
        .iter()
        .filter(|(_, n)| *n == max_rounds_seen)
        .copied()
        .collect();
    hardest.truncate(10);

    log::info!(
        "solved {solved}/{} secrets, average {average_rounds:.3} rounds",
        secrets.len()
    );

    Ok(TestAllStatistics {
        total_codes: secrets.len(),
        solved,
        failed: unsolved.len(),
        round_distribution,
        total_time,
        average_rounds,
        max_rounds: max_rounds_seen,
        min_rounds,
        hardest,
        unsolved,
        second_guesses,
    })
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_codes);
    let total = stats.total_codes.max(1) as f64;
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Not solved:          {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Rounds range:        {} to {}",
        stats.min_rounds, stats.max_rounds
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:     {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(1);
    for (&rounds, &count) in &stats.round_distribution {
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {rounds:2} rounds: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.hardest.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Secrets ({} rounds)", stats.max_rounds)
                .yellow()
                .bold()
        );
        let codes: Vec<String> = stats.hardest.iter().map(|(c, _)| colored_code(c)).collect();
        println!("  {}", codes.join(" "));
    }

    if !stats.unsolved.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        let codes: Vec<String> = stats.unsolved.iter().take(10).map(ToString::to_string).collect();
        println!("  {}", codes.join(" "));
    }

    println!("\n🎯 Second Guess Usage");
    let mut seconds: Vec<(Code, usize)> = stats
        .second_guesses
        .iter()
        .map(|(k, v)| (*k, *v))
        .collect();
    seconds.sort_by_key(|(code, count)| (std::cmp::Reverse(*count), *code));
    for (code, count) in seconds.iter().take(5) {
        let percentage = *count as f64 / total * 100.0;
        println!("  {}: {count} times ({percentage:.1}%)", colored_code(code));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy};

    #[test]
    fn test_all_with_limit() {
        let stats =
            run_test_all(Rules::CLASSIC, &MinimaxStrategy::new(), 10, Some(20), false).unwrap();

        assert_eq!(stats.total_codes, 20);
        assert_eq!(stats.solved, 20);
        assert_eq!(stats.failed, 0);
        assert!(stats.max_rounds <= 5);
        assert_eq!(stats.round_distribution.values().sum::<usize>(), 20);
    }

    #[test]
    fn test_all_small_universe_exhaustively() {
        let rules = Rules::new(3, 3).unwrap();
        let stats = run_test_all(rules, &FirstCandidateStrategy, 10, None, false).unwrap();

        assert_eq!(stats.total_codes, 27);
        assert_eq!(stats.solved, 27);
        assert_eq!(stats.min_rounds, 1);
        assert!(stats.hardest.iter().all(|(_, n)| *n == stats.max_rounds));
    }

    #[test]
    fn test_all_limit_larger_than_universe() {
        let rules = Rules::new(2, 2).unwrap();
        let stats = run_test_all(rules, &MinimaxStrategy::new(), 10, Some(100), false).unwrap();

        assert_eq!(stats.total_codes, 4);
    }

    #[test]
    fn test_all_reports_unsolved() {
        let rules = Rules::new(2, 3).unwrap();
        let stats = run_test_all(rules, &FirstCandidateStrategy, 1, None, false).unwrap();

        // Only the first code can be hit in a single round
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 8);
        assert_eq!(stats.unsolved.len(), 8);
        assert!(stats.second_guesses.is_empty());
    }
}
