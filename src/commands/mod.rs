//! Command implementations

pub mod clues;
pub mod numbers;
pub mod singles;

pub use clues::{ClueSession, run_clues};
pub use numbers::{NumbersConfig, parse_numbers, parse_target, run_numbers, solve_puzzle};
pub use singles::{BestSingle, Single, best_single, singles, singleton_count};
