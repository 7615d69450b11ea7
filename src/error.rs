//! Error types
//!
//! Every error is local to one game. Callers that want to start over build a
//! fresh [`Breaker`](crate::solver::Breaker).

use crate::core::{Code, Feedback, Rules};
use std::path::PathBuf;

/// Invalid game parameters
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("code length must be between 1 and {max}, got {0}", max = Rules::MAX_LENGTH)]
    InvalidLength(u8),

    #[error("color count must be between 1 and {max}, got {0}", max = Rules::MAX_COLORS)]
    InvalidColors(u8),

    #[error("{colors}^{length} codes is more than the {max} supported", max = Rules::MAX_UNIVERSE)]
    UniverseTooLarge { length: u8, colors: u8 },
}

/// A code that does not fit the rules of the game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("code must have exactly {expected} pegs, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("peg {peg} at position {position} is outside 1..={colors}")]
    ColorOutOfRange { position: usize, peg: u8, colors: u8 },

    #[error("'{0}' is not a code made of digits")]
    NotANumber(String),

    #[error("code was built for {found} but the game uses {expected}")]
    RulesMismatch { expected: Rules, found: Rules },
}

/// Feedback counts that no pair of codes could produce
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("{exact} exact + {color_only} color-only exceeds the code length {length}")]
    TooManyPegs {
        exact: u8,
        color_only: u8,
        length: u8,
    },

    #[error("cannot read feedback from '{0}'")]
    Unparseable(String),
}

/// A strategy could not produce a guess
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("no candidates remain to choose from")]
    NoCandidates,

    #[error("every code in the universe has already been guessed")]
    NoUnguessedCodes,

    #[error("guess input closed before a valid code was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Misuse of the breaker or an inconsistent game
#[derive(Debug, thiserror::Error)]
pub enum BreakerError {
    #[error("the code universe is empty")]
    EmptyUniverse,

    #[error("universe mixes codes from different rules: {0}")]
    MixedUniverse(#[source] CodeError),

    #[error("strategy guessed a code outside the game's rules: {0}")]
    ForeignGuess(#[source] CodeError),

    #[error("secret does not fit the game's rules: {0}")]
    ForeignSecret(#[source] CodeError),

    #[error("a guess is still waiting for feedback")]
    GuessPending,

    #[error("feedback applied before any guess was made")]
    NoGuessPending,

    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] FeedbackError),

    #[error("no code is consistent with feedback {feedback} for guess {guess}")]
    CandidatesExhausted { guess: Code, feedback: Feedback },

    #[error("strategy failed: {0}")]
    Strategy(#[from] StrategyError),
}

/// An interactive session could not continue
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Breaker(#[from] BreakerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid rules: {0}")]
    Rules(#[from] RulesError),

    #[error("invalid opening: {0}")]
    Opening(#[from] CodeError),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_error_display() {
        assert_eq!(
            RulesError::InvalidLength(0).to_string(),
            "code length must be between 1 and 9, got 0"
        );
        assert_eq!(
            RulesError::UniverseTooLarge {
                length: 9,
                colors: 9
            }
            .to_string(),
            "9^9 codes is more than the 1048576 supported"
        );
    }

    #[test]
    fn code_error_display() {
        let err = CodeError::ColorOutOfRange {
            position: 2,
            peg: 7,
            colors: 6,
        };
        assert_eq!(err.to_string(), "peg 7 at position 2 is outside 1..=6");
    }

    #[test]
    fn breaker_error_wraps_strategy_error() {
        let err = BreakerError::from(StrategyError::NoCandidates);
        assert_eq!(
            err.to_string(),
            "strategy failed: no candidates remain to choose from"
        );
    }

    #[test]
    fn rules_mismatch_messages_name_the_culprit() {
        let mismatch = || CodeError::RulesMismatch {
            expected: Rules::CLASSIC,
            found: Rules::CLASSIC,
        };

        assert!(BreakerError::MixedUniverse(mismatch())
            .to_string()
            .starts_with("universe mixes codes"));
        assert!(BreakerError::ForeignGuess(mismatch())
            .to_string()
            .starts_with("strategy guessed a code"));
        assert!(BreakerError::ForeignSecret(mismatch())
            .to_string()
            .starts_with("secret does not fit"));
    }

    #[test]
    fn session_error_is_transparent_over_breaker() {
        let err = SessionError::from(BreakerError::GuessPending);
        assert_eq!(err.to_string(), "a guess is still waiting for feedback");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::Validation("max_rounds must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: max_rounds must be > 0"
        );
    }
}
