//! Code solving command
//!
//! Plays one game against a known secret and returns the solution path.

use crate::core::{Code, CodeMaker, Feedback};
use crate::error::BreakerError;
use crate::solver::{Breaker, Strategy};

/// Result of solving one secret
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub secret: Code,
    pub rounds: Vec<RoundStep>,
}

impl SolveResult {
    /// Number of guesses made
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.rounds.len()
    }
}

/// A single round in the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play one game: guess, judge, apply feedback, until solved or out of rounds
///
/// The breaker should be fresh. Once the round budget is spent the breaker is
/// left untouched and `success` is false.
///
/// # Errors
/// Returns `BreakerError` if the secret does not fit the breaker's rules or
/// the breaker fails to produce a guess.
///
/// # Examples
/// ```
/// use mastermind_solver::commands::solve_code;
/// use mastermind_solver::core::{Code, Rules};
/// use mastermind_solver::solver::{Breaker, MinimaxStrategy};
///
/// let rules = Rules::CLASSIC;
/// let secret = Code::from_integer(3632, rules).unwrap();
/// let mut breaker = Breaker::with_rules(rules, MinimaxStrategy::new());
///
/// let result = solve_code(secret, &mut breaker, 10).unwrap();
/// assert!(result.success);
/// assert_eq!(result.rounds.last().unwrap().guess, secret);
/// ```
pub fn solve_code<S: Strategy>(
    secret: Code,
    breaker: &mut Breaker<S>,
    max_rounds: usize,
) -> Result<SolveResult, BreakerError> {
    secret
        .ensure_rules(breaker.rules())
        .map_err(BreakerError::ForeignSecret)?;

    let maker = CodeMaker::new(secret);
    let mut rounds = Vec::new();

    for _ in 0..max_rounds {
        let candidates_before = breaker.candidates().len();
        let guess = breaker.guess()?;
        let feedback = maker.judge(&guess);
        let candidates_after = breaker.apply_feedback(feedback)?;

        rounds.push(RoundStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_perfect(breaker.rules()) {
            return Ok(SolveResult {
                success: true,
                secret,
                rounds,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        secret,
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::{FirstCandidateStrategy, FixedGuessStrategy, MinimaxStrategy};

    fn code(value: u64) -> Code {
        Code::from_integer(value, Rules::CLASSIC).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());

        let result = solve_code(code(3632), &mut breaker, 10).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, code(3632));
        assert!(result.rounds_played() <= 5);
        assert_eq!(result.rounds[0].guess, code(1122));
        assert_eq!(result.rounds[0].candidates_before, 1296);
    }

    #[test]
    fn solve_records_history() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, FirstCandidateStrategy);

        let result = solve_code(code(6152), &mut breaker, 10).unwrap();

        for pair in result.rounds.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
            assert_eq!(step.feedback, code(6152).compare(&step.guess));
        }
        assert_eq!(result.rounds.last().unwrap().candidates_after, 1);
    }

    #[test]
    fn solve_perfect_first_guess() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());

        let result = solve_code(code(1122), &mut breaker, 10).unwrap();

        assert!(result.success);
        assert_eq!(result.rounds_played(), 1);
        assert_eq!(result.rounds[0].feedback, Feedback::new(4, 0));
    }

    #[test]
    fn solve_with_max_rounds_limit() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());

        let result = solve_code(code(3632), &mut breaker, 2).unwrap();

        assert!(!result.success);
        assert_eq!(result.rounds_played(), 2);
        // No extra guess was requested once the budget ran out
        assert!(!breaker.is_awaiting_feedback());
        assert_eq!(breaker.round(), 2);
    }

    #[test]
    fn solve_zero_rounds_makes_no_calls() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());

        let result = solve_code(code(3632), &mut breaker, 0).unwrap();

        assert!(!result.success);
        assert!(result.rounds.is_empty());
        assert!(breaker.guesses().is_empty());
    }

    #[test]
    fn solve_rejects_secret_from_other_rules() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, MinimaxStrategy::new());
        let secret = Code::from_integer(123, Rules::new(3, 6).unwrap()).unwrap();

        assert!(matches!(
            solve_code(secret, &mut breaker, 10),
            Err(BreakerError::ForeignSecret(_))
        ));
    }

    #[test]
    fn stubborn_strategy_runs_out_of_rounds() {
        let mut breaker = Breaker::with_rules(Rules::CLASSIC, FixedGuessStrategy::new(code(1111)));

        let result = solve_code(code(2222), &mut breaker, 3).unwrap();

        assert!(!result.success);
        assert_eq!(result.rounds_played(), 3);
        assert!(result.rounds.iter().all(|step| step.guess == code(1111)));
    }
}
