//! Formatting utilities for terminal output

use crate::core::{Color, ExprError, Feedback, Op};
use colored::{ColoredString, Colorize};

const ATOM: u8 = 3;

const fn precedence(op: Op) -> u8 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
    }
}

/// Render a postfix expression in conventional infix form
///
/// Only the parentheses precedence requires are emitted.
///
/// # Errors
/// Returns `ExprError` if the postfix text is malformed.
///
/// # Examples
/// ```
/// use puzzle_helpers::output::formatters::postfix_to_infix;
///
/// assert_eq!(postfix_to_infix("3 4 + 5 *").unwrap(), "(3 + 4) * 5");
/// assert_eq!(postfix_to_infix("2 3 * 4 +").unwrap(), "2 * 3 + 4");
/// ```
pub fn postfix_to_infix(expr: &str) -> Result<String, ExprError> {
    let mut stack: Vec<(String, u8)> = Vec::new();

    for token in expr.split_whitespace() {
        if let Some(op) = Op::from_token(token) {
            let (rhs, rhs_prec) = stack.pop().ok_or(ExprError::MissingOperand(op))?;
            let (lhs, lhs_prec) = stack.pop().ok_or(ExprError::MissingOperand(op))?;
            let prec = precedence(op);

            let lhs = if lhs_prec < prec { format!("({lhs})") } else { lhs };
            let non_associative = matches!(op, Op::Sub | Op::Div);
            let rhs = if rhs_prec < prec || (rhs_prec == prec && non_associative) {
                format!("({rhs})")
            } else {
                rhs
            };
            stack.push((format!("{lhs} {op} {rhs}"), prec));
        } else {
            token
                .parse::<i64>()
                .map_err(|_| ExprError::InvalidToken(token.to_string()))?;
            stack.push((token.to_string(), ATOM));
        }
    }

    match stack.len() {
        1 => Ok(stack.remove(0).0),
        n => Err(ExprError::Unbalanced(n)),
    }
}

/// Format feedback as colored letter tiles
#[must_use]
pub fn colored_guess(word: &str, feedback: Feedback) -> String {
    word.chars()
        .zip(feedback.colors())
        .map(|(letter, &color)| tile(letter, color).to_string())
        .collect()
}

fn tile(letter: char, color: Color) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match color {
        Color::Green => text.black().on_green().bold(),
        Color::Yellow => text.black().on_yellow().bold(),
        Color::Black => text.white().on_bright_black(),
    }
}

/// Lay out words in fixed-width columns, `per_row` to a line
#[must_use]
pub fn columns<'a>(words: impl IntoIterator<Item = &'a str>, per_row: usize) -> String {
    let per_row = per_row.max(1);
    let words: Vec<&str> = words.into_iter().collect();
    words
        .chunks(per_row)
        .map(|row| row.join("  "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infix_single_number() {
        assert_eq!(postfix_to_infix("42").unwrap(), "42");
        assert_eq!(postfix_to_infix("-7").unwrap(), "-7");
    }

    #[test]
    fn infix_keeps_needed_parentheses() {
        assert_eq!(postfix_to_infix("3 4 + 5 *").unwrap(), "(3 + 4) * 5");
        assert_eq!(postfix_to_infix("5 3 4 + *").unwrap(), "5 * (3 + 4)");
        assert_eq!(postfix_to_infix("9 4 2 - -").unwrap(), "9 - (4 - 2)");
        assert_eq!(postfix_to_infix("12 6 2 / /").unwrap(), "12 / (6 / 2)");
    }

    #[test]
    fn infix_drops_redundant_parentheses() {
        assert_eq!(postfix_to_infix("5 5 + 5 +").unwrap(), "5 + 5 + 5");
        assert_eq!(postfix_to_infix("5 5 5 + +").unwrap(), "5 + 5 + 5");
        assert_eq!(postfix_to_infix("4 3 * 2 -").unwrap(), "4 * 3 - 2");
        assert_eq!(postfix_to_infix("2 3 4 * +").unwrap(), "2 + 3 * 4");
    }

    #[test]
    fn infix_rejects_malformed() {
        assert!(postfix_to_infix("3 +").is_err());
        assert!(postfix_to_infix("3 4").is_err());
        assert!(postfix_to_infix("3 x +").is_err());
    }

    #[test]
    fn columns_wraps_rows() {
        let out = columns(["aback", "abase", "abate"], 2);
        assert_eq!(out, "aback  abase\nabate");
        assert_eq!(columns([], 4), "");
    }

    #[test]
    fn colored_guess_has_every_letter() {
        colored::control::set_override(false);
        let fb: Feedback = "GYBBB".parse().unwrap();
        assert_eq!(colored_guess("chant", fb), " C  H  A  N  T ");
    }
}
