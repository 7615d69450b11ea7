//! Mastermind Solver
//!
//! A Mastermind code breaker built on candidate elimination and Knuth's
//! minimax search. Classic rules (4 pegs, 6 colors) are solved in at most five
//! guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::commands::solve_code;
//! use mastermind_solver::core::{Code, Rules};
//! use mastermind_solver::solver::{Breaker, MinimaxStrategy};
//!
//! let rules = Rules::CLASSIC;
//! let secret = Code::from_integer(4421, rules).unwrap();
//! let mut breaker = Breaker::with_rules(rules, MinimaxStrategy::new());
//!
//! let result = solve_code(secret, &mut breaker, 10).unwrap();
//! assert!(result.success);
//! assert!(result.rounds_played() <= 5);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// TOML configuration
pub mod config;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
