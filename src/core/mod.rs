//! Core domain types
//!
//! Pure types shared by both puzzle helpers: arithmetic witnesses for the
//! numbers game, and words, feedback and clues for the word filter.

mod clue;
mod expr;
mod feedback;
mod word;

pub use clue::{Clue, ClueError, CountRange, LetterSet, filter, parse_guess};
pub use expr::{ExprError, Op, Witness, evaluate_postfix};
pub use feedback::{Color, Feedback, FeedbackParseError};
pub use word::{WORD_LEN, Word, WordError};
