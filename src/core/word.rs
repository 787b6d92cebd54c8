//! Five-letter word representation
//!
//! A Word stores a lowercase five-letter word as bytes plus per-letter counts,
//! which clue matching and feedback computation both need.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A lowercase five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
    counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5, or if the text has
    /// non-ASCII or non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use puzzle_helpers::core::Word;
    ///
    /// let word = Word::new("Chant").unwrap();
    /// assert_eq!(word.text(), "chant");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sp1lt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let letters: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !letters.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut counts = [0u8; 26];
        for &letter in &letters {
            counts[letter_index(letter)] += 1;
        }

        Ok(Self {
            text,
            letters,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Per-letter occurrence counts, indexed `a` = 0 through `z` = 25
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; 26] {
        &self.counts
    }
}

/// Index of a lowercase ASCII letter in the alphabet
#[inline]
pub(crate) fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("spilt").unwrap();
        assert_eq!(word.text(), "spilt");
        assert_eq!(word.letters(), b"spilt");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BRUTE").unwrap();
        assert_eq!(word.text(), "brute");
        assert_eq!(Word::new("BrUtE").unwrap(), word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crané"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("chant").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(4), b't');
    }

    #[test]
    fn word_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
        assert_eq!(word.letter_counts().iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn word_counts_ignore_non_letters() {
        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.count_of(b'a'), 5);
        assert_eq!(word.count_of(b'!'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("power").unwrap();
        assert_eq!(format!("{word}"), "power");
    }
}
