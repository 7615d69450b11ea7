//! Benchmark command
//!
//! Tests breaker performance across random secrets.

use super::solve::solve_code;
use crate::core::{CodeMaker, Rules};
use crate::error::BreakerError;
use crate::solver::{Breaker, Strategy};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total_games - self.solved
    }
}

/// Play `count` games against random secrets drawn from `rng`
///
/// Every game gets a fresh breaker with its own copy of `strategy`.
/// Statistics on rounds count solved games only.
///
/// # Errors
/// Returns the first `BreakerError` raised by any game.
pub fn run_benchmark<S, R>(
    rules: Rules,
    strategy: &S,
    count: usize,
    max_rounds: usize,
    rng: &mut R,
) -> Result<BenchmarkResult, BreakerError>
where
    S: Strategy + Clone,
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds_seen = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for _ in 0..count {
        let maker = CodeMaker::random(rules, rng);
        let mut breaker = Breaker::with_rules(rules, strategy.clone());
        let result = solve_code(*maker.secret(), &mut breaker, max_rounds)?;

        if result.success {
            let rounds = result.rounds_played();
            solved += 1;
            total_rounds += rounds;
            min_rounds = min_rounds.min(rounds);
            max_rounds_seen = max_rounds_seen.max(rounds);
            *distribution.entry(rounds).or_insert(0) += 1;
        } else {
            log::warn!("{} not solved in {max_rounds} rounds", maker.secret());
        }
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: count,
        solved,
        total_rounds,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds: max_rounds_seen,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
