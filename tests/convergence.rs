//! End-to-end games against many secrets

use mastermind_solver::commands::{run_test_all, solve_code};
use mastermind_solver::core::{Code, Feedback, Rules, universe};
use mastermind_solver::solver::{
    Breaker, FirstCandidateStrategy, FixedGuessStrategy, MinimaxStrategy, Strategy,
};

const MAX_ROUNDS: usize = 10;

/// Every 13th secret of the classic universe (100 secrets)
fn sampled_secrets() -> Vec<Code> {
    universe(Rules::CLASSIC).into_iter().step_by(13).collect()
}

fn rounds_for<S: Strategy + Clone>(strategy: &S, secrets: &[Code]) -> Vec<usize> {
    secrets
        .iter()
        .map(|&secret| {
            let mut breaker = Breaker::with_rules(secret.rules(), strategy.clone());
            let result = solve_code(secret, &mut breaker, MAX_ROUNDS).unwrap();
            assert!(result.success, "{secret} not solved");
            assert_eq!(result.rounds.last().unwrap().guess, secret);
            result.rounds_played()
        })
        .collect()
}

fn average(rounds: &[usize]) -> f64 {
    rounds.iter().sum::<usize>() as f64 / rounds.len() as f64
}

#[test]
fn minimax_converges_on_sampled_secrets() {
    let secrets = sampled_secrets();
    assert_eq!(secrets.len(), 100);

    let rounds = rounds_for(&MinimaxStrategy::new(), &secrets);

    assert!(rounds.iter().all(|&n| n <= 5));
}

#[test]
fn first_candidate_converges_on_every_secret() {
    let stats =
        run_test_all(Rules::CLASSIC, &FirstCandidateStrategy, MAX_ROUNDS, None, false).unwrap();

    assert_eq!(stats.total_codes, 1296);
    assert_eq!(stats.failed, 0);
    assert!(stats.max_rounds <= MAX_ROUNDS);
}

#[test]
fn minimax_average_beats_first_candidate() {
    let secrets = sampled_secrets();

    let minimax = average(&rounds_for(&MinimaxStrategy::new(), &secrets));
    let first = average(&rounds_for(&FirstCandidateStrategy, &secrets));

    assert!(minimax <= first, "minimax {minimax:.3} vs first {first:.3}");
}

#[test]
#[ignore = "plays all 1296 classic secrets with minimax"]
fn knuth_exhaustive_result() {
    let stats =
        run_test_all(Rules::CLASSIC, &MinimaxStrategy::new(), MAX_ROUNDS, None, false).unwrap();

    assert_eq!(stats.failed, 0);
    assert_eq!(stats.max_rounds, 5);
    // 5801 / 1296 = 4.476
    assert_eq!(
        stats
            .round_distribution
            .iter()
            .map(|(rounds, count)| rounds * count)
            .sum::<usize>(),
        5801
    );
}

#[test]
fn other_rules_converge() {
    for (length, colors) in [(1, 1), (2, 3), (3, 4), (5, 2)] {
        let rules = Rules::new(length, colors).unwrap();
        let secrets = universe(rules);

        let minimax = rounds_for(&MinimaxStrategy::new(), &secrets);
        let first = rounds_for(&FirstCandidateStrategy, &secrets);

        assert_eq!(minimax.len(), rules.universe_size());
        assert!(average(&minimax) <= average(&first) + f64::EPSILON);
    }
}

#[test]
fn reference_elimination_through_breaker() {
    let rules = Rules::CLASSIC;
    let code = |n| Code::from_integer(n, rules).unwrap();
    let mut breaker = Breaker::new(
        vec![code(6666), code(5555), code(4444)],
        FixedGuessStrategy::new(code(5566)),
    )
    .unwrap();

    let guess = breaker.guess().unwrap();
    let remaining = breaker.apply_feedback(Feedback::new(2, 0)).unwrap();

    assert_eq!(guess, code(5566));
    assert_eq!(remaining, 2);
    assert_eq!(breaker.candidates(), &[code(6666), code(5555)]);
}
