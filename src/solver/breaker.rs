//! Code breaker state machine
//!
//! The breaker alternates between producing a guess and absorbing feedback
//! for it. Guess production is delegated to a [`Strategy`].

use super::elimination::eliminate;
use super::strategy::Strategy;
use crate::core::{Code, Feedback, Rules, universe};
use crate::error::BreakerError;

/// Infers a secret code from feedback
///
/// Owns the code universe, the surviving candidates, the guess and feedback
/// histories, and the strategy. It has no notion of winning; the caller decides
/// when feedback is perfect.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, CodeMaker, Rules};
/// use mastermind_solver::solver::{Breaker, MinimaxStrategy};
///
/// let rules = Rules::CLASSIC;
/// let maker = CodeMaker::new(Code::from_integer(3632, rules).unwrap());
/// let mut breaker = Breaker::with_rules(rules, MinimaxStrategy::new());
///
/// let guess = breaker.guess().unwrap();
/// let remaining = breaker.apply_feedback(maker.judge(&guess)).unwrap();
///
/// assert!(remaining < 1296);
/// assert!(breaker.candidates().contains(maker.secret()));
/// ```
pub struct Breaker<S: Strategy> {
    rules: Rules,
    universe: Vec<Code>,
    candidates: Vec<Code>,
    guesses: Vec<Code>,
    feedbacks: Vec<Feedback>,
    strategy: S,
}

impl<S: Strategy> Breaker<S> {
    /// Create a breaker over an explicit universe
    ///
    /// Every code in the universe starts as a candidate.
    ///
    /// # Errors
    /// Returns `BreakerError::EmptyUniverse` for an empty universe and
    /// `BreakerError::MixedUniverse` if the codes disagree on their rules.
    pub fn new(universe: Vec<Code>, strategy: S) -> Result<Self, BreakerError> {
        let rules = universe
            .first()
            .map(Code::rules)
            .ok_or(BreakerError::EmptyUniverse)?;

        for code in &universe {
            code.ensure_rules(rules)
                .map_err(BreakerError::MixedUniverse)?;
        }

        Ok(Self {
            rules,
            candidates: universe.clone(),
            universe,
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            strategy,
        })
    }

    /// Create a breaker over the full universe of `rules`
    #[must_use]
    pub fn with_rules(rules: Rules, strategy: S) -> Self {
        let universe = universe(rules);
        Self {
            rules,
            candidates: universe.clone(),
            universe,
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            strategy,
        }
    }

    /// Produce the next guess and wait for its feedback
    ///
    /// # Errors
    /// - `GuessPending` if the previous guess has no feedback yet
    /// - `CandidatesExhausted` if earlier feedback eliminated every candidate
    /// - `Strategy` if the strategy cannot produce a guess
    /// - `ForeignGuess` if the strategy returns a code for other rules
    pub fn guess(&mut self) -> Result<Code, BreakerError> {
        if self.is_awaiting_feedback() {
            return Err(BreakerError::GuessPending);
        }

        if self.candidates.is_empty()
            && let (Some(&guess), Some(&feedback)) = (self.guesses.last(), self.feedbacks.last())
        {
            return Err(BreakerError::CandidatesExhausted { guess, feedback });
        }

        let guess = self
            .strategy
            .next_guess(&self.universe, &self.candidates, &self.guesses)?;
        guess
            .ensure_rules(self.rules)
            .map_err(BreakerError::ForeignGuess)?;

        log::debug!(
            "round {}: {} guesses {guess} with {} candidates",
            self.round() + 1,
            self.strategy.name(),
            self.candidates.len()
        );

        self.guesses.push(guess);
        Ok(guess)
    }

    /// Record feedback for the outstanding guess and eliminate candidates
    ///
    /// Returns how many candidates survive.
    ///
    /// # Errors
    /// - `NoGuessPending` if there is no outstanding guess
    /// - `InvalidFeedback` if the counts cannot occur under the rules
    /// - `CandidatesExhausted` if no candidate survives; the breaker stays
    ///   consistent with an empty candidate set
    pub fn apply_feedback(&mut self, feedback: Feedback) -> Result<usize, BreakerError> {
        if !self.is_awaiting_feedback() {
            return Err(BreakerError::NoGuessPending);
        }
        let Some(&guess) = self.guesses.last() else {
            return Err(BreakerError::NoGuessPending);
        };

        feedback.validate(self.rules)?;
        self.feedbacks.push(feedback);

        let before = self.candidates.len();
        let remaining = eliminate(&mut self.candidates, &guess, feedback);
        log::debug!("{guess} scored {feedback}: {before} -> {remaining} candidates");

        if remaining == 0 {
            return Err(BreakerError::CandidatesExhausted { guess, feedback });
        }
        Ok(remaining)
    }

    /// Swap in a new strategy, returning the old one
    pub fn set_strategy(&mut self, strategy: S) -> S {
        std::mem::replace(&mut self.strategy, strategy)
    }

    #[must_use]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn strategy_mut(&mut self) -> &mut S {
        &mut self.strategy
    }

    /// Codes still consistent with every feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    /// Guesses made so far, including one still awaiting feedback
    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Completed (guess, feedback) rounds, oldest first
    pub fn history(&self) -> impl Iterator<Item = (Code, Feedback)> + '_ {
        self.guesses.iter().copied().zip(self.feedbacks.iter().copied())
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Check whether the last guess still needs feedback
    #[must_use]
    pub fn is_awaiting_feedback(&self) -> bool {
        self.guesses.len() > self.feedbacks.len()
    }

    /// Number of completed rounds
    #[must_use]
    pub fn round(&self) -> usize {
        self.feedbacks.len()
    }
}
