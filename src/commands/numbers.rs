//! Numbers-game driver
//!
//! Reads a target and the available numbers, runs the reachability search and
//! reports the cheapest expression for the target.

use crate::core::Witness;
use crate::output::formatters::postfix_to_infix;
use crate::reach::{EngineConfig, SolveError, find};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing::info;

/// Settings for a numbers-game run
#[derive(Debug, Clone, Copy, Default)]
pub struct NumbersConfig {
    pub engine: EngineConfig,
    pub show_infix: bool,
}

/// Parse the target line: a single, possibly signed, integer
///
/// # Errors
/// Returns `SolveError::InvalidInput` unless the line holds exactly one integer.
pub fn parse_target(line: &str) -> Result<i64, SolveError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => token
            .parse()
            .map_err(|_| SolveError::InvalidInput(format!("'{token}' is not an integer"))),
        (None, _) => Err(SolveError::InvalidInput("missing target value".to_string())),
        (Some(_), Some(_)) => Err(SolveError::InvalidInput(
            "target must be a single integer".to_string(),
        )),
    }
}

/// Parse the whitespace-separated source numbers
///
/// # Errors
/// Returns `SolveError::InvalidInput` for any non-integer token and
/// `SolveError::EmptyInput` for a blank line.
pub fn parse_numbers(line: &str) -> Result<Vec<i64>, SolveError> {
    let numbers = line
        .split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| SolveError::InvalidInput(format!("'{token}' is not an integer")))
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if numbers.is_empty() {
        return Err(SolveError::EmptyInput);
    }
    Ok(numbers)
}

/// Find the best expression for `target` from `numbers`
///
/// # Errors
/// Returns `SolveError` if the input is rejected or the target is unreachable.
pub fn solve_puzzle(
    target: i64,
    numbers: &[i64],
    config: &NumbersConfig,
) -> Result<Witness, SolveError> {
    let start = Instant::now();
    let result = find(target, numbers, &config.engine);
    info!(
        target,
        numbers = ?numbers,
        found = result.is_ok(),
        elapsed_ms = start.elapsed().as_millis(),
        "numbers search finished"
    );
    result
}

/// Run the interactive numbers prompt until EOF or `quit`
///
/// Bad input and unreachable targets are reported and the prompt repeats.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_numbers<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &NumbersConfig,
) -> io::Result<()> {
    loop {
        let Some(line) = prompt(&mut input, &mut output, "Enter the target value: ")? else {
            return Ok(());
        };
        if is_quit(&line) {
            return Ok(());
        }
        let target = match parse_target(&line) {
            Ok(target) => target,
            Err(e) => {
                writeln!(output, "❌ {e}\n")?;
                continue;
            }
        };

        let Some(line) = prompt(&mut input, &mut output, "And the available nums: ")? else {
            return Ok(());
        };
        let numbers = match parse_numbers(&line) {
            Ok(numbers) => numbers,
            Err(e) => {
                writeln!(output, "❌ {e}\n")?;
                continue;
            }
        };

        writeln!(output)?;
        match solve_puzzle(target, &numbers, config) {
            Ok(witness) => {
                writeln!(output, "Answer: {}", witness.expr())?;
                if config.show_infix
                    && let Ok(infix) = postfix_to_infix(witness.expr())
                {
                    writeln!(output, "        {infix} ({} ops)", witness.ops())?;
                }
            }
            Err(e) => writeln!(output, "❌ {e}")?,
        }
        writeln!(output)?;
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line, "quit" | "q" | "exit")
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
