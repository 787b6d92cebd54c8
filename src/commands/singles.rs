//! Clue-generation analytics
//!
//! Measures how often a guess produces feedback that pins down exactly one
//! target in the dictionary.

use crate::core::{Color, Feedback, Word};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::info;

/// A feedback pattern that only one target produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Single {
    pub feedback: Feedback,
    pub blacks: usize,
    pub target: Word,
}

/// The guesses that isolate the most targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSingle {
    pub count: usize,
    pub guesses: Vec<String>,
}

/// Group targets by the feedback `guess` produces for them
fn feedback_groups<'a>(guess: &Word, targets: &'a [Word]) -> FxHashMap<Feedback, Vec<&'a Word>> {
    let mut groups: FxHashMap<Feedback, Vec<&Word>> = FxHashMap::default();
    for target in targets {
        groups
            .entry(Feedback::compute(guess, target))
            .or_default()
            .push(target);
    }
    groups
}

/// Feedback patterns of `guess` that exactly one target produces
///
/// Sorted by black count, then by pattern.
///
/// # Examples
/// ```
/// use puzzle_helpers::commands::singles;
/// use puzzle_helpers::core::Word;
/// use puzzle_helpers::wordlists::loader::words_from_slice;
///
/// let targets = words_from_slice(&["crane", "crate", "spilt"]);
/// let guess = Word::new("crane").unwrap();
/// assert_eq!(singles(&guess, &targets).len(), 3);
/// ```
#[must_use]
pub fn singles(guess: &Word, targets: &[Word]) -> Vec<Single> {
    let mut found: Vec<Single> = feedback_groups(guess, targets)
        .into_iter()
        .filter_map(|(feedback, group)| match group.as_slice() {
            [target] => Some(Single {
                feedback,
                blacks: feedback.count(Color::Black),
                target: (*target).clone(),
            }),
            _ => None,
        })
        .collect();

    found.sort_by_key(|single| (single.blacks, single.feedback));
    found
}

/// Number of targets `guess` isolates on its own
#[must_use]
pub fn singleton_count(guess: &Word, targets: &[Word]) -> usize {
    feedback_groups(guess, targets)
        .values()
        .filter(|group| group.len() == 1)
        .count()
}

/// Find the dictionary guesses with the most singleton patterns
///
/// Every word is tried as a guess against every word as a target, in
/// parallel.
#[must_use]
pub fn best_single(dictionary: &[Word], show_progress: bool) -> BestSingle {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(dictionary.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("scoring guesses");

    let scored: Vec<(usize, &Word)> = dictionary
        .par_iter()
        .map(|guess| {
            let count = singleton_count(guess, dictionary);
            pb.inc(1);
            (count, guess)
        })
        .collect();
    pb.finish_and_clear();

    let count = scored.iter().map(|&(count, _)| count).max().unwrap_or(0);
    let mut guesses: Vec<String> = scored
        .into_iter()
        .filter(|&(c, _)| c == count)
        .map(|(_, guess)| guess.text().to_string())
        .collect();
    guesses.sort();

    info!(
        words = dictionary.len(),
        best = count,
        ties = guesses.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "singleton scan finished"
    );

    BestSingle { count, guesses }
}
