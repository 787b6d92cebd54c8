//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::DICTIONARY;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wordlist {
    /// The list compiled into the binary
    Embedded,
    /// One word per line in a text file
    File(PathBuf),
}

impl Wordlist {
    /// Interpret a `--wordlist` argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the words
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(&self) -> io::Result<Vec<Word>> {
        let words = match self {
            Self::Embedded => words_from_slice(DICTIONARY),
            Self::File(path) => load_from_file(path)?,
        };
        debug!(source = ?self, words = words.len(), "dictionary loaded");
        Ok(words)
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#`
/// comments and invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use puzzle_helpers::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(&path)?;
    Ok(parse_words(&content, path.as_ref()))
}

fn parse_words(content: &str, origin: &Path) -> Vec<Word> {
    let mut skipped = 0usize;
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(path = %origin.display(), skipped, "skipped invalid dictionary entries");
    }
    words
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use puzzle_helpers::wordlists::loader::words_from_slice;
/// use puzzle_helpers::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["spilt", "chant", "brute"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "spilt");
        assert_eq!(words[2].text(), "brute");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["spilt", "toolong", "abc", "chant"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "spilt");
        assert_eq!(words[1].text(), "chant");
    }

    #[test]
    fn parse_words_ignores_comments_and_blanks() {
        let content = "# five letter words\nspilt\n\n  CHANT \nnope\nbrute\n";
        let words = parse_words(content, Path::new("inline"));
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["spilt", "chant", "brute"]);
    }

    #[test]
    fn wordlist_from_arg() {
        assert_eq!(Wordlist::from_arg("embedded"), Wordlist::Embedded);
        assert_eq!(
            Wordlist::from_arg("my/words.txt"),
            Wordlist::File(PathBuf::from("my/words.txt"))
        );
    }

    #[test]
    fn embedded_wordlist_loads_everything() {
        let words = Wordlist::Embedded.load().unwrap();
        assert_eq!(words.len(), DICTIONARY.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = Wordlist::File(PathBuf::from("/definitely/not/here.txt"));
        assert!(source.load().is_err());
    }
}
