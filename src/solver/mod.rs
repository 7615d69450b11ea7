//! Mastermind code breaking
//!
//! Candidate elimination, guess strategies and the breaker that ties them
//! together.

mod breaker;
mod elimination;
pub mod minimax;
pub mod strategy;

pub use breaker::Breaker;
pub use elimination::{eliminate, filter_by_history, is_consistent};
pub use strategy::{
    FirstCandidateStrategy, FixedGuessStrategy, HumanStrategy, MinimaxStrategy, Strategy,
    StrategyType,
};
