//! Display functions for command results

use super::formatters::{colored_guess, columns, postfix_to_infix};
use crate::commands::{BestSingle, Single};
use crate::core::{Clue, Feedback, Witness, Word};
use colored::Colorize;

/// Print the chosen numbers-game answer
pub fn print_answer(witness: &Witness, show_infix: bool) {
    println!();
    println!("Answer: {}", witness.expr().bright_green().bold());
    if show_infix && let Ok(infix) = postfix_to_infix(witness.expr()) {
        println!(
            "        {} {}",
            infix.bright_white(),
            format!("({} ops)", witness.ops()).bright_black()
        );
    }
}

/// Print the words consistent with the accumulated clue
pub fn print_candidates(candidates: &[&Word]) {
    println!("\n{}", "Possible Words:".bright_cyan().bold());
    if candidates.is_empty() {
        println!("  {}", "(none)".red());
    } else {
        println!("{}", columns(candidates.iter().map(|w| w.text()), 8));
        println!(
            "{}",
            format!("{} candidates", candidates.len()).bright_black()
        );
    }
    println!();
}

/// Echo a guess with its tiles colored
pub fn print_guess(word: &Word, feedback: Feedback) {
    println!("  {}", colored_guess(word.text(), feedback));
}

/// Print the constraints a clue currently holds
pub fn print_clue(clue: &Clue) {
    println!("{}", "Current constraints:".bright_cyan());
    for line in clue.to_string().lines() {
        println!("  {line}");
    }
}

/// Print the singleton feedback patterns for one guess
pub fn print_singles(guess: &Word, singles: &[Single]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SINGLETON FEEDBACK:".bright_cyan().bold(),
        guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    for single in singles {
        println!(
            "{} {} {}  {}",
            single.blacks,
            single.feedback,
            single.feedback.to_emoji(),
            single.target.text().bright_white()
        );
    }
    println!(
        "\n{} patterns isolate a single target",
        singles.len().to_string().bright_yellow().bold()
    );
}

/// Print the guesses isolating the most targets
pub fn print_best_single(best: &BestSingle) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MOST SINGLETON PATTERNS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} targets isolated by each of:",
        best.count.to_string().bright_yellow().bold()
    );
    println!("{}", columns(best.guesses.iter().map(String::as_str), 8));
}
