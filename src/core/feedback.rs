//! Mastermind feedback representation
//!
//! Feedback is the pair of peg counts a maker reports after a guess:
//! - exact (black pegs): right color in the right position
//! - color-only (white pegs): right color in the wrong position

use super::Rules;
use crate::error::FeedbackError;
use std::fmt;

/// Black and white peg counts for one guess
///
/// Produced by [`Code::compare`](super::Code::compare); never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    color_only: u8,
}

impl Feedback {
    /// Create feedback from raw counts without validation
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        Self { exact, color_only }
    }

    /// Create feedback, rejecting counts that cannot occur under `rules`
    ///
    /// # Errors
    /// Returns `FeedbackError::TooManyPegs` if `exact + color_only` exceeds
    /// the code length.
    pub fn checked(exact: u8, color_only: u8, rules: Rules) -> Result<Self, FeedbackError> {
        let feedback = Self::new(exact, color_only);
        feedback.validate(rules)?;
        Ok(feedback)
    }

    /// Feedback for a perfect match under `rules`
    #[inline]
    #[must_use]
    pub const fn perfect(rules: Rules) -> Self {
        Self::new(rules.length(), 0)
    }

    /// Number of pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Check whether every peg matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, rules: Rules) -> bool {
        self.exact == rules.length()
    }

    /// Check that the counts fit in a code of the given rules
    ///
    /// # Errors
    /// Returns `FeedbackError::TooManyPegs` when the counts sum past the length.
    pub fn validate(self, rules: Rules) -> Result<(), FeedbackError> {
        if u16::from(self.exact) + u16::from(self.color_only) > u16::from(rules.length()) {
            return Err(FeedbackError::TooManyPegs {
                exact: self.exact,
                color_only: self.color_only,
                length: rules.length(),
            });
        }
        Ok(())
    }

    /// Parse feedback typed by a human
    ///
    /// Accepts:
    /// - two counts separated by whitespace, ',' or '/', e.g. "2 1" or "2,1"
    /// - peg notation: 'B'/'b' for black, 'W'/'w' for white, '-'/'.'/'_' for no peg
    ///
    /// # Errors
    /// Returns `FeedbackError` if the text is neither form or the counts do not
    /// fit the rules.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, Rules};
    ///
    /// let rules = Rules::CLASSIC;
    /// let a = Feedback::parse("2 1", rules).unwrap();
    /// let b = Feedback::parse("BBW-", rules).unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, Feedback::new(2, 1));
    /// ```
    pub fn parse(input: &str, rules: Rules) -> Result<Self, FeedbackError> {
        let trimmed = input.trim();
        let unparseable = || FeedbackError::Unparseable(trimmed.to_string());

        if trimmed.is_empty() {
            return Err(unparseable());
        }

        let feedback = if trimmed.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            let counts: Vec<&str> = trimmed
                .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
                .filter(|part| !part.is_empty())
                .collect();
            let [exact, color_only] = counts.as_slice() else {
                return Err(unparseable());
            };
            let exact: u8 = exact.parse().map_err(|_| unparseable())?;
            let color_only: u8 = color_only.parse().map_err(|_| unparseable())?;
            Self::new(exact, color_only)
        } else {
            let mut exact = 0u8;
            let mut color_only = 0u8;
            for ch in trimmed.chars() {
                match ch {
                    'B' | 'b' => exact = exact.saturating_add(1),
                    'W' | 'w' => color_only = color_only.saturating_add(1),
                    '-' | '.' | '_' => {}
                    _ => return Err(unparseable()),
                }
            }
            Self::new(exact, color_only)
        };

        feedback.validate(rules)?;
        Ok(feedback)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} black, {} white", self.exact, self.color_only)
    }
}
