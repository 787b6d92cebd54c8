//! Accumulated clue constraints
//!
//! A clue is built from one guess and its feedback, and several clues merge
//! into one by intersecting their constraints. Two kinds of constraint are
//! tracked:
//! - per letter, an inclusive range for how many times it occurs
//! - per position, the set of letters still allowed there

use super::feedback::{Color, Feedback};
use super::word::{WORD_LEN, Word, letter_index};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for clue construction and merging
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClueError {
    #[error("clue must be `LLLLL CCCCC` with C in {{B,G,Y}} and L in [a-z], got '{0}'")]
    Malformed(String),
    #[error("attempted merge of incompatible clues")]
    Incompatible,
}

/// Inclusive bounds on how many times a letter appears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u8,
    /// `None` means unbounded
    pub max: Option<u8>,
}

impl CountRange {
    /// No constraint at all
    pub const ANY: Self = Self { min: 0, max: None };

    #[must_use]
    pub const fn exactly(n: u8) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    #[must_use]
    pub const fn at_least(n: u8) -> Self {
        Self { min: n, max: None }
    }

    #[must_use]
    pub fn contains(self, n: u8) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }

    /// Intersection of two ranges, or `None` if they do not overlap
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let min = self.min.max(other.min);
        let max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        match max {
            Some(max) if max < min => None,
            _ => Some(Self { min, max }),
        }
    }
}

/// A set of lowercase letters as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const ALL: Self = Self((1 << 26) - 1);

    #[must_use]
    pub fn single(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    #[must_use]
    pub fn without(self, letter: u8) -> Self {
        Self(self.0 & !(1 << letter_index(letter)))
    }

    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

/// Constraints accumulated from one or more guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    counts: [CountRange; 26],
    allowed: [LetterSet; WORD_LEN],
}

impl Clue {
    /// A clue every word satisfies; merging with it is a no-op
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            counts: [CountRange::ANY; 26],
            allowed: [LetterSet::ALL; WORD_LEN],
        }
    }

    /// Build the clue implied by playing `guess` and seeing `feedback`
    ///
    /// # Examples
    /// ```
    /// use puzzle_helpers::core::{Clue, Word};
    ///
    /// let clue: Clue = "spilt BGBBY".parse().unwrap();
    /// assert!(clue.matches(&Word::new("opted").unwrap()));
    /// assert!(!clue.matches(&Word::new("plank").unwrap()));
    /// ```
    #[must_use]
    pub fn from_guess(guess: &Word, feedback: Feedback) -> Self {
        let colors = feedback.colors();
        let mut counts = [CountRange::ANY; 26];
        let mut general = LetterSet::ALL;

        for letter in b'a'..=b'z' {
            let occurrences = guess.count_of(letter);
            if occurrences == 0 {
                continue;
            }
            let colored = |color: Color| {
                (0..WORD_LEN)
                    .filter(|&i| guess.letter_at(i) == letter && colors[i] == color)
                    .count() as u8
            };
            let blacks = colored(Color::Black);

            counts[letter_index(letter)] = if blacks > 0 {
                if colored(Color::Yellow) == 0 {
                    general = general.without(letter);
                }
                CountRange::exactly(occurrences - blacks)
            } else {
                CountRange::at_least(occurrences)
            };
        }

        let mut allowed = [LetterSet::ALL; WORD_LEN];
        for (i, slot) in allowed.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            *slot = match colors[i] {
                Color::Green => LetterSet::single(letter),
                Color::Black => general,
                Color::Yellow => general.without(letter),
            };
        }

        Self { counts, allowed }
    }

    /// Check whether `word` is consistent with every constraint
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.letters()
            .iter()
            .zip(&self.allowed)
            .all(|(&letter, set)| set.contains(letter))
            && self
                .counts
                .iter()
                .zip(word.letter_counts())
                .all(|(range, &n)| range.contains(n))
    }

    /// Fold `other` into this clue
    ///
    /// # Errors
    /// Returns `ClueError::Incompatible` if no word could satisfy both clues;
    /// `self` is left unchanged in that case.
    pub fn merge(&mut self, other: &Self) -> Result<(), ClueError> {
        let mut counts = self.counts;
        for (range, theirs) in counts.iter_mut().zip(&other.counts) {
            *range = range.intersect(*theirs).ok_or(ClueError::Incompatible)?;
        }

        let mut allowed = self.allowed;
        for (set, theirs) in allowed.iter_mut().zip(&other.allowed) {
            *set = set.intersect(*theirs);
            if set.is_empty() {
                return Err(ClueError::Incompatible);
            }
        }

        self.counts = counts;
        self.allowed = allowed;
        Ok(())
    }

    /// Count bounds for `letter`
    #[must_use]
    pub fn count_range(&self, letter: u8) -> CountRange {
        self.counts[letter_index(letter)]
    }

    /// Letters still allowed at `position`
    #[must_use]
    pub const fn allowed_at(&self, position: usize) -> LetterSet {
        self.allowed[position]
    }
}

impl Default for Clue {
    fn default() -> Self {
        Self::identity()
    }
}

/// Split a clue line `LLLLL CCCCC` into the guess and its feedback
///
/// # Errors
/// Returns `ClueError::Malformed` unless the line is exactly five letters,
/// one space and five color codes.
pub fn parse_guess(s: &str) -> Result<(Word, Feedback), ClueError> {
    let malformed = || ClueError::Malformed(s.to_string());

    let (letters, colors) = s.split_once(' ').ok_or_else(malformed)?;
    if letters.len() != WORD_LEN || colors.contains(' ') {
        return Err(malformed());
    }
    let guess = Word::new(letters).map_err(|_| malformed())?;
    let feedback = colors.parse::<Feedback>().map_err(|_| malformed())?;

    Ok((guess, feedback))
}

impl FromStr for Clue {
    type Err = ClueError;

    /// Parse `LLLLL CCCCC`, e.g. `"power BYBGB"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = parse_guess(s)?;
        Ok(Self::from_guess(&guess, feedback))
    }
}

impl fmt::Display for Clue {
    /// One line per position listing allowed letters, then the count bounds
    /// that actually constrain something
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, set) in self.allowed.iter().enumerate() {
            let letters: String = set.letters().map(char::from).collect();
            writeln!(f, "{i} {letters}")?;
        }
        for (letter, range) in (b'a'..=b'z').zip(&self.counts) {
            if *range != CountRange::ANY {
                match range.max {
                    Some(max) => writeln!(f, "{} {}..={max}", char::from(letter), range.min)?,
                    None => writeln!(f, "{} {}..", char::from(letter), range.min)?,
                }
            }
        }
        Ok(())
    }
}

/// Words from `dictionary` that satisfy `clue`, in dictionary order
#[must_use]
pub fn filter<'a>(dictionary: &'a [Word], clue: &Clue) -> Vec<&'a Word> {
    dictionary.iter().filter(|w| clue.matches(w)).collect()
}
