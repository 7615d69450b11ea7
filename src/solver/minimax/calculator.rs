//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Rules};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let rules = Rules::CLASSIC;
/// let guess = Code::from_integer(1122, rules).unwrap();
/// let candidates = vec![
///     Code::from_integer(1111, rules).unwrap(),
///     Code::from_integer(2222, rules).unwrap(),
///     Code::from_integer(3333, rules).unwrap(),
/// ];
///
/// // 1111 and 2222 both give two black pegs against 1122
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    // Group candidates by feedback
    let feedback_counts = group_by_feedback(guess, candidates);

    // Return the maximum count (worst case)
    feedback_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they produce with the guess
///
/// Keys are compared by value, so every distinct (exact, color-only) pair gets
/// its own bucket.
#[must_use]
pub fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = candidate.compare(guess);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
