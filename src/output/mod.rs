//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_answer, print_best_single, print_candidates, print_clue, print_guess, print_singles,
};
