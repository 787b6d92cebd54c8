//! Errors raised by the numbers-game search

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no numbers to search")]
    EmptyInput,

    #[error("no solution for target {target}")]
    NoSolution { target: i64 },

    #[error("search space too large: {len} numbers exceeds the limit of {limit}")]
    SearchSpaceTooLarge { len: usize, limit: usize },

    #[error("search space too large: more than {budget} candidate expressions")]
    BudgetExceeded { budget: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_solution_names_target() {
        let e = SolveError::NoSolution { target: 100 };
        assert_eq!(e.to_string(), "no solution for target 100");
    }

    #[test]
    fn search_space_reports_both_sizes() {
        let e = SolveError::SearchSpaceTooLarge { len: 12, limit: 8 };
        let msg = e.to_string();
        assert!(msg.contains("12") && msg.contains('8'));
    }

    #[test]
    fn budget_message_reads_as_search_space_error() {
        let e = SolveError::BudgetExceeded { budget: 1_000 };
        assert_eq!(
            e.to_string(),
            "search space too large: more than 1000 candidate expressions"
        );
    }

    #[test]
    fn invalid_input_carries_detail() {
        let e = SolveError::InvalidInput("'x' is not an integer".into());
        assert!(e.to_string().starts_with("invalid input"));
        let _: &dyn std::error::Error = &e;
    }
}
