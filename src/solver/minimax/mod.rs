//! Knuth's minimax search
//!
//! Scores every unguessed code by the largest feedback group it could leave
//! behind and picks the smallest.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_feedback};
pub use selector::{TieBreak, select_best_guess, select_best_guess_sequential};
