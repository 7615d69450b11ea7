//! Candidate elimination
//!
//! A candidate survives a round only if it would have produced the observed
//! feedback had it been the secret.

use crate::core::{Code, Feedback};

/// Check whether `candidate` could be the secret given `guess` and `feedback`
#[inline]
#[must_use]
pub fn is_consistent(candidate: &Code, guess: &Code, feedback: Feedback) -> bool {
    candidate.compare(guess) == feedback
}

/// Discard every candidate inconsistent with the latest guess and feedback
///
/// Keeps the surviving candidates in their original order and returns how many
/// remain. The set only ever shrinks.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback, Rules};
/// use mastermind_solver::solver::eliminate;
///
/// let rules = Rules::CLASSIC;
/// let mut candidates: Vec<Code> = [6666, 5555, 4444]
///     .iter()
///     .map(|&n| Code::from_integer(n, rules).unwrap())
///     .collect();
/// let guess = Code::from_integer(5566, rules).unwrap();
///
/// let remaining = eliminate(&mut candidates, &guess, Feedback::new(2, 0));
/// assert_eq!(remaining, 2);
/// ```
pub fn eliminate(candidates: &mut Vec<Code>, guess: &Code, feedback: Feedback) -> usize {
    candidates.retain(|candidate| is_consistent(candidate, guess, feedback));
    candidates.len()
}

/// Codes from `codes` consistent with every (guess, feedback) pair in `history`
#[must_use]
pub fn filter_by_history<'a>(codes: &'a [Code], history: &[(Code, Feedback)]) -> Vec<&'a Code> {
    codes
        .iter()
        .filter(|&candidate| {
            history
                .iter()
                .all(|(guess, feedback)| is_consistent(candidate, guess, *feedback))
        })
        .collect()
}
