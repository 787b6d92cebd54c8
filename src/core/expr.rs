//! Arithmetic operators, witnesses and postfix evaluation
//!
//! A witness proves a value is reachable: it carries the number of binary
//! operations used and a postfix expression such as `"3 4 + 5 *"`.

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// The four operations the numbers game allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Postfix symbol for this operator
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Parse an operator token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Apply the operator with game rules
    ///
    /// Returns `None` on overflow, on a negative subtraction, or when a
    /// division is not exact (including division by zero).
    ///
    /// # Examples
    /// ```
    /// use puzzle_helpers::core::Op;
    ///
    /// assert_eq!(Op::Div.apply(12, 4), Some(3));
    /// assert_eq!(Op::Div.apply(12, 5), None);
    /// assert_eq!(Op::Sub.apply(3, 4), None);
    /// ```
    #[must_use]
    pub fn apply(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Sub => lhs.checked_sub(rhs).filter(|&v| v >= 0),
            Self::Div => {
                if rhs != 0 && lhs.checked_rem(rhs)? == 0 {
                    lhs.checked_div(rhs)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Proof that a value is reachable
///
/// Ordered by operation count first and expression text second, so the first
/// element of a sorted witness set is always the preferred answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Witness {
    ops: u32,
    expr: String,
}

impl Witness {
    /// Witness for a raw source number (zero operations)
    #[must_use]
    pub fn leaf(value: i64) -> Self {
        Self {
            ops: 0,
            expr: value.to_string(),
        }
    }

    /// Witness for `left op right`, written in postfix
    #[must_use]
    pub fn combine(left: &Self, right: &Self, op: Op) -> Self {
        Self {
            ops: left.ops + right.ops + 1,
            expr: format!("{} {} {}", left.expr, right.expr, op.symbol()),
        }
    }

    /// Build a witness from its raw parts
    #[must_use]
    pub fn new(ops: u32, expr: impl Into<String>) -> Self {
        Self {
            ops,
            expr: expr.into(),
        }
    }

    /// Number of binary operations used
    #[inline]
    #[must_use]
    pub const fn ops(&self) -> u32 {
        self.ops
    }

    /// The postfix expression
    #[inline]
    #[must_use]
    pub fn expr(&self) -> &str {
        &self.expr
    }
}

impl Ord for Witness {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ops
            .cmp(&other.ops)
            .then_with(|| self.expr.cmp(&other.expr))
    }
}

impl PartialOrd for Witness {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

/// Errors raised while evaluating a postfix expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("invalid token '{0}'")]
    InvalidToken(String),
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(Op),
    #[error("{lhs} {op} {rhs} is not allowed")]
    IllegalOperation { lhs: i64, op: Op, rhs: i64 },
    #[error("expression leaves {0} values on the stack")]
    Unbalanced(usize),
}

/// Evaluate a postfix expression with exact integer rules
///
/// Subtraction must not go negative and division must be exact, the same
/// rules the reachability engine applies when building expressions.
///
/// # Errors
/// Returns `ExprError` for unknown tokens, stack underflow, illegal
/// operations, or leftover operands.
///
/// # Examples
/// ```
/// use puzzle_helpers::core::evaluate_postfix;
///
/// assert_eq!(evaluate_postfix("3 4 + 5 *"), Ok(35));
/// assert!(evaluate_postfix("3 4 /").is_err());
/// ```
pub fn evaluate_postfix(expr: &str) -> Result<i64, ExprError> {
    let mut stack: Vec<i64> = Vec::new();

    for token in expr.split_whitespace() {
        if let Some(op) = Op::from_token(token) {
            let rhs = stack.pop().ok_or(ExprError::MissingOperand(op))?;
            let lhs = stack.pop().ok_or(ExprError::MissingOperand(op))?;
            let value = op
                .apply(lhs, rhs)
                .ok_or(ExprError::IllegalOperation { lhs, op, rhs })?;
            stack.push(value);
        } else {
            let value = token
                .parse::<i64>()
                .map_err(|_| ExprError::InvalidToken(token.to_string()))?;
            stack.push(value);
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(ExprError::Unbalanced(rest.len())),
    }
}
