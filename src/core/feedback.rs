//! Per-letter guess feedback
//!
//! Feedback is written as five color codes, one per position:
//! - `B` = Black (letter not in the target beyond the copies already colored)
//! - `Y` = Yellow (letter in the target, wrong position)
//! - `G` = Green (letter in the correct position)

use super::word::{WORD_LEN, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color of a single feedback square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    Yellow,
    Green,
}

impl Color {
    /// Parse a color code (`B`, `Y` or `G`, either case)
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'B' | 'b' => Some(Self::Black),
            'Y' | 'y' => Some(Self::Yellow),
            'G' | 'g' => Some(Self::Green),
            _ => None,
        }
    }

    /// Uppercase color code
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Emoji square for this color
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Black => '⬛',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Feedback for one guess: a color per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback([Color; WORD_LEN]);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("feedback must be 5 color codes from B, G, Y, got '{0}'")]
pub struct FeedbackParseError(pub String);

impl Feedback {
    /// All greens (the guess was the target)
    pub const SOLVED: Self = Self([Color::Green; WORD_LEN]);

    /// Build feedback from explicit colors
    #[must_use]
    pub const fn new(colors: [Color; WORD_LEN]) -> Self {
        Self(colors)
    }

    /// The colors, by position
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LEN] {
        &self.0
    }

    /// Check if every square is green
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Number of squares with the given color
    #[must_use]
    pub fn count(self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// Compute the feedback shown when `guess` is played against `target`
    ///
    /// Greens are assigned first. Remaining guess letters turn yellow left to
    /// right while unmatched copies of that letter remain in the target.
    ///
    /// # Examples
    /// ```
    /// use puzzle_helpers::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    /// assert_eq!(Feedback::compute(&guess, &target).to_string(), "YBYYB");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let mut colors = [Color::Black; WORD_LEN];
        let mut unmatched = [0u8; 26];

        for (i, color) in colors.iter_mut().enumerate() {
            if guess.letter_at(i) == target.letter_at(i) {
                *color = Color::Green;
            } else {
                unmatched[letter_index(target.letter_at(i))] += 1;
            }
        }

        for (i, color) in colors.iter_mut().enumerate() {
            if *color == Color::Green {
                continue;
            }
            let available = &mut unmatched[letter_index(guess.letter_at(i))];
            if *available > 0 {
                *color = Color::Yellow;
                *available -= 1;
            }
        }

        Self(colors)
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || FeedbackParseError(s.to_string());
        let mut colors = [Color::Black; WORD_LEN];
        let mut codes = s.chars();

        for slot in &mut colors {
            *slot = codes.next().and_then(Color::from_code).ok_or_else(err)?;
        }
        if codes.next().is_some() {
            return Err(err());
        }

        Ok(Self(colors))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}
