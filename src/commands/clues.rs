//! Interactive clue filter
//!
//! Guesses are entered as `LLLLL CCCCC` lines. Each batch of clues is merged
//! and the dictionary words still consistent with it are listed.

use crate::core::{Clue, ClueError, Feedback, Word, filter, parse_guess};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line that ends a batch of clues, or the session at batch start
pub const END: &str = ".";

/// Line that replays every previous guess, asking only for new colors
pub const REPEAT: &str = "*";

/// Printed whenever a line is rejected
pub const REJECTED: &str = "---FEIL---";

/// Accumulated state of a clue session
pub struct ClueSession<'a> {
    dictionary: &'a [Word],
    guesses: Vec<Word>,
    clue: Clue,
}

impl<'a> ClueSession<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word]) -> Self {
        Self {
            dictionary,
            guesses: Vec::new(),
            clue: Clue::identity(),
        }
    }

    /// Forget the current constraints, keeping the guessed words
    pub fn start_batch(&mut self) {
        self.clue = Clue::identity();
    }

    /// Merge a full `LLLLL CCCCC` clue line into the batch
    ///
    /// # Errors
    /// Returns `ClueError` if the line is malformed or contradicts the batch;
    /// the session is unchanged in that case.
    pub fn add(&mut self, line: &str) -> Result<(Word, Feedback), ClueError> {
        let (guess, feedback) = parse_guess(line)?;
        self.clue.merge(&Clue::from_guess(&guess, feedback))?;
        self.guesses.push(guess.clone());
        Ok((guess, feedback))
    }

    /// Merge new colors for a word guessed earlier
    ///
    /// # Errors
    /// Returns `ClueError` if the colors are malformed or contradict the batch.
    pub fn replay(&mut self, guess: &Word, colors: &str) -> Result<(), ClueError> {
        let clue: Clue = format!("{guess} {colors}").parse()?;
        self.clue.merge(&clue)
    }

    /// Every word guessed so far, in entry order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Constraints of the current batch
    #[must_use]
    pub const fn clue(&self) -> &Clue {
        &self.clue
    }

    /// Dictionary words consistent with the current batch
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        filter(self.dictionary, &self.clue)
    }
}

/// Run the interactive clue filter until `.` at batch start or EOF
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_clues<R: BufRead, W: Write>(
    dictionary: &[Word],
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    print_instructions(&mut output)?;

    let mut session = ClueSession::new(dictionary);
    let Some(mut line) = read_line(&mut input)? else {
        return Ok(());
    };

    while line != END {
        session.start_batch();

        if line == REPEAT {
            let previous = session.guesses().to_vec();
            for guess in &previous {
                loop {
                    write!(output, "{guess} ")?;
                    output.flush()?;
                    let Some(colors) = read_line(&mut input)? else {
                        return Ok(());
                    };
                    match session.replay(guess, &colors) {
                        Ok(()) => break,
                        Err(e) => reject(&mut output, &e)?,
                    }
                }
            }
        } else {
            while let Err(e) = session.add(&line) {
                reject(&mut output, &e)?;
                let Some(next) = read_line(&mut input)? else {
                    return Ok(());
                };
                line = next;
            }
        }

        loop {
            let Some(next) = read_line(&mut input)? else {
                return write_candidates(&mut output, &session.candidates());
            };
            if next == END {
                break;
            }
            if let Err(e) = session.add(&next) {
                reject(&mut output, &e)?;
            }
        }

        write_candidates(&mut output, &session.candidates())?;

        line = match read_line(&mut input)? {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}

fn print_instructions<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Enter the clues already guessed, one line each.")?;
    writeln!(
        output,
        "Each line should first have the letters guessed, then the colors returned."
    )?;
    writeln!(
        output,
        "B: black (not included), G: Green (right letter, right place), \
         Y: Yellow (right letter, wrong place)"
    )?;
    writeln!(output)?;
    writeln!(output, "To end clue entry, type a line containing just a `{END}`")?;
    writeln!(
        output,
        "To stop getting words, type a line containing just a `{END}`"
    )?;
    writeln!(output)?;
    writeln!(output, "Hint: power lucks admin")?;
    writeln!(
        output,
        "To repeat the same words you've already entered prior, enter `{REPEAT}`."
    )?;
    writeln!(output, "Then, just enter color codes on the next lines.")
}

fn write_candidates<W: Write>(output: &mut W, candidates: &[&Word]) -> io::Result<()> {
    writeln!(output, "\nPossible Words:")?;
    for word in candidates {
        writeln!(output, "{word}")?;
    }
    writeln!(output)
}

fn reject<W: Write>(output: &mut W, error: &ClueError) -> io::Result<()> {
    debug!(%error, "clue rejected");
    writeln!(output, "{REJECTED}")
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
