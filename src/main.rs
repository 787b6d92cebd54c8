//! Puzzle Helpers - CLI
//!
//! Numbers-game solver and word-game clue filter.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use puzzle_helpers::{
    commands::{
        ClueSession, NumbersConfig, best_single, run_clues, run_numbers, singles, solve_puzzle,
    },
    core::Word,
    logging,
    output::{
        print_answer, print_best_single, print_candidates, print_clue, print_guess, print_singles,
    },
    reach::{EngineConfig, Forwarding},
    wordlists::loader::Wordlist,
};
use std::io;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "puzzle_helpers",
    about = "Numbers-game solver and word-game clue filter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins if set
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Largest count of source numbers the search accepts
    #[arg(long, global = true, default_value_t = EngineConfig::DEFAULT_MAX_NUMBERS)]
    max_numbers: usize,

    /// Combine every witness pair instead of only the cheapest (slow, at most 5 numbers)
    #[arg(long, global = true)]
    exhaustive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reach a target from the given numbers (default, interactive without --target)
    Numbers {
        /// Solve once for this target instead of prompting
        #[arg(short, long, allow_negative_numbers = true)]
        target: Option<i64>,

        /// Source numbers for a one-shot solve
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,

        /// Also show the answer in infix form
        #[arg(long)]
        infix: bool,
    },

    /// Filter the dictionary by clues (interactive without arguments)
    Clues {
        /// Clues in 'LLLLL CCCCC' form, e.g. "crane BGYBB"
        clues: Vec<String>,
    },

    /// List feedback patterns of a guess that only one word produces
    Singles {
        /// The guess to analyze
        guess: String,
    },

    /// Find the guesses that isolate the most words
    BestSingle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let forwarding = if cli.exhaustive {
        Forwarding::Exhaustive
    } else {
        Forwarding::Cheapest
    };
    let engine = EngineConfig::new(cli.max_numbers, forwarding);

    let command = cli.command.unwrap_or(Commands::Numbers {
        target: None,
        numbers: Vec::new(),
        infix: false,
    });

    match command {
        Commands::Numbers {
            target,
            numbers,
            infix,
        } => {
            let config = NumbersConfig {
                engine,
                show_infix: infix,
            };
            run_numbers_command(target, &numbers, &config)
        }
        Commands::Clues { clues } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_clues_command(&clues, &dictionary, cli.verbose > 0)
        }
        Commands::Singles { guess } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_singles_command(&guess, &dictionary)
        }
        Commands::BestSingle => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            print_best_single(&best_single(&dictionary, true));
            Ok(())
        }
    }
}

fn load_dictionary(arg: &str) -> Result<Vec<Word>> {
    let source = Wordlist::from_arg(arg);
    let words = source
        .load()
        .with_context(|| format!("failed to load wordlist '{arg}'"))?;
    if words.is_empty() {
        bail!("wordlist '{arg}' contains no valid words");
    }
    Ok(words)
}

fn run_numbers_command(target: Option<i64>, numbers: &[i64], config: &NumbersConfig) -> Result<()> {
    match (target, numbers.is_empty()) {
        (None, true) => {
            let stdin = io::stdin();
            run_numbers(stdin.lock(), io::stdout(), config)?;
            Ok(())
        }
        (Some(target), false) => {
            let witness = solve_puzzle(target, numbers, config)?;
            print_answer(&witness, config.show_infix);
            Ok(())
        }
        (Some(_), true) => bail!("--target needs at least one source number"),
        (None, false) => bail!("source numbers given without --target"),
    }
}

fn run_clues_command(clues: &[String], dictionary: &[Word], verbose: bool) -> Result<()> {
    if clues.is_empty() {
        let stdin = io::stdin();
        run_clues(dictionary, stdin.lock(), io::stdout())?;
        return Ok(());
    }

    let mut session = ClueSession::new(dictionary);
    for line in clues {
        let (guess, feedback) = session
            .add(line)
            .with_context(|| format!("rejected clue '{line}'"))?;
        debug!(%guess, %feedback, "clue merged");
        print_guess(&guess, feedback);
    }
    if verbose {
        print_clue(session.clue());
    }
    print_candidates(&session.candidates());
    Ok(())
}

fn run_singles_command(guess: &str, dictionary: &[Word]) -> Result<()> {
    let guess = Word::new(guess)?;
    let found = singles(&guess, dictionary);
    print_singles(&guess, &found);
    Ok(())
}
