//! Puzzle Helpers
//!
//! Two small solvers: a numbers-game search that finds the cheapest
//! arithmetic expression reaching a target, and a word-game clue filter that
//! lists the dictionary words consistent with the feedback seen so far.
//!
//! # Quick Start
//!
//! ```rust
//! use puzzle_helpers::reach::{EngineConfig, find};
//! use puzzle_helpers::core::{Clue, Word};
//!
//! // Numbers game: reach 10 from 2, 3 and 4
//! let witness = find(10, &[2, 3, 4], &EngineConfig::default()).unwrap();
//! assert_eq!(witness.expr(), "2 3 * 4 +");
//!
//! // Word game: which words survive a clue
//! let clue: Clue = "crane BGGBG".parse().unwrap();
//! assert!(clue.matches(&Word::new("grate").unwrap()));
//! ```

// Core domain types
pub mod core;

// Numbers-game search
pub mod reach;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
