//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: rules, codes, feedback,
//! the code universe and the secret holder. Everything here is pure and
//! single-threaded.

mod code;
mod feedback;
mod maker;
mod rules;
mod universe;

pub use code::Code;
pub use feedback::Feedback;
pub use maker::CodeMaker;
pub use rules::Rules;
pub use universe::{CodeIterator, universe};
