//! Word lists for the clue filter
//!
//! Provides the embedded dictionary and loading of user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
