//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{TieBreak, select_best_guess};
use crate::core::{Code, Rules};
use crate::error::StrategyError;
use std::io::{BufRead, Write};

/// A source of guesses for the breaker
pub trait Strategy {
    /// Produce the next guess
    ///
    /// `universe` is every legal code, `candidates` the codes still consistent
    /// with all feedback so far, and `past_guesses` every guess already made,
    /// oldest first.
    ///
    /// # Errors
    /// Returns `StrategyError` if no guess can be produced.
    fn next_guess(
        &mut self,
        universe: &[Code],
        candidates: &[Code],
        past_guesses: &[Code],
    ) -> Result<Code, StrategyError>;

    /// Short display name
    fn name(&self) -> &'static str;
}

/// Enum wrapper for the automatic strategies
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Knuth's minimax (default)
    Minimax(MinimaxStrategy),
    /// Always guess the first remaining candidate
    FirstCandidate(FirstCandidateStrategy),
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: &'static [&'static str] = &["minimax", "first", "swaszek", "simple"];

    /// Create strategy from name string
    ///
    /// Supported names: "minimax", and "first", "swaszek" or "simple" for the
    /// first-candidate strategy. Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "minimax" | "knuth" => Some(Self::Minimax(MinimaxStrategy::new())),
            "first" | "swaszek" | "simple" => Some(Self::FirstCandidate(FirstCandidateStrategy)),
            _ => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy::new())
    }
}

impl Strategy for StrategyType {
    fn next_guess(
        &mut self,
        universe: &[Code],
        candidates: &[Code],
        past_guesses: &[Code],
    ) -> Result<Code, StrategyError> {
        match self {
            Self::Minimax(s) => s.next_guess(universe, candidates, past_guesses),
            Self::FirstCandidate(s) => s.next_guess(universe, candidates, past_guesses),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Minimax(s) => s.name(),
            Self::FirstCandidate(s) => s.name(),
        }
    }
}

/// Knuth's minimax strategy
///
/// Opens with a fixed code, then always picks the code whose worst-case
/// feedback leaves the fewest candidates.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Rules, universe};
/// use mastermind_solver::solver::{MinimaxStrategy, Strategy};
///
/// let all = universe(Rules::CLASSIC);
/// let mut strategy = MinimaxStrategy::new();
///
/// let opening = strategy.next_guess(&all, &all, &[]).unwrap();
/// assert_eq!(opening.to_string(), "1122");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy {
    opening: Option<Code>,
    tie_break: TieBreak,
}

impl MinimaxStrategy {
    /// Minimax with the conventional opening and candidate-preferring ties
    #[must_use]
    pub const fn new() -> Self {
        Self {
            opening: None,
            tie_break: TieBreak::PreferCandidates,
        }
    }

    /// Use `opening` as the first guess instead of [`Code::opening`]
    #[must_use]
    pub const fn with_opening(mut self, opening: Code) -> Self {
        self.opening = Some(opening);
        self
    }

    /// Change how equal worst cases are resolved
    #[must_use]
    pub const fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    fn opening_for(&self, rules: Rules) -> Code {
        self.opening.unwrap_or_else(|| Code::opening(rules))
    }
}

impl Strategy for MinimaxStrategy {
    fn next_guess(
        &mut self,
        universe: &[Code],
        candidates: &[Code],
        past_guesses: &[Code],
    ) -> Result<Code, StrategyError> {
        if let [only] = candidates {
            return Ok(*only);
        }

        if past_guesses.is_empty()
            && let Some(first) = universe.first().or(candidates.first())
        {
            return Ok(self.opening_for(first.rules()));
        }

        if candidates.is_empty() {
            return Err(StrategyError::NoCandidates);
        }

        let (best, worst) = select_best_guess(universe, candidates, past_guesses, self.tie_break)
            .ok_or(StrategyError::NoUnguessedCodes)?;

        log::trace!(
            "minimax picked {best} (worst case {worst} of {})",
            candidates.len()
        );
        Ok(*best)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Guess the first remaining candidate
///
/// Needs no search at all; every guess could be the secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn next_guess(
        &mut self,
        _universe: &[Code],
        candidates: &[Code],
        _past_guesses: &[Code],
    ) -> Result<Code, StrategyError> {
        candidates.first().copied().ok_or(StrategyError::NoCandidates)
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Always return the same pre-programmed code
#[derive(Debug, Clone, Copy)]
pub struct FixedGuessStrategy {
    guess: Code,
}

impl FixedGuessStrategy {
    #[must_use]
    pub const fn new(guess: Code) -> Self {
        Self { guess }
    }
}

impl Strategy for FixedGuessStrategy {
    fn next_guess(
        &mut self,
        _universe: &[Code],
        _candidates: &[Code],
        _past_guesses: &[Code],
    ) -> Result<Code, StrategyError> {
        Ok(self.guess)
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Guesses typed by a human
///
/// Prompts on `output` and reads one code per line from `input`. Malformed
/// lines are reported and the prompt repeats; "quit" ends input like EOF.
pub struct HumanStrategy<R, W> {
    rules: Rules,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    pub const fn new(rules: Rules, input: R, output: W) -> Self {
        Self {
            rules,
            input,
            output,
        }
    }

    /// The stream prompts are written to
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the input and output streams
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn next_guess(
        &mut self,
        _universe: &[Code],
        candidates: &[Code],
        past_guesses: &[Code],
    ) -> Result<Code, StrategyError> {
        let round = past_guesses.len() + 1;

        loop {
            write!(
                self.output,
                "Guess {round} ({} possible): ",
                candidates.len()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 || is_quit(&line) {
                return Err(StrategyError::InputClosed);
            }

            match Code::parse(&line, self.rules) {
                Ok(code) => return Ok(code),
                Err(e) => writeln!(self.output, "Invalid code: {e}")?,
            }
        }
    }

    fn name(&self) -> &'static str {
        "human"
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}
