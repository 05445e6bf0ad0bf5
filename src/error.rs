//! Error types for formula evaluation.

use thiserror::Error;

/// Ways a token sequence can violate the grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedError {
    /// A token (or the end of input) appeared where something else was required.
    #[error("expected {expected} but found '{found}' at position {position}")]
    Unexpected {
        position: usize,
        expected: &'static str,
        found: String,
    },

    /// Parenthesis nesting or a run of negations went deeper than allowed.
    #[error("nesting depth exceeds the limit of {limit}")]
    TooDeep { limit: usize },
}

/// Errors that can occur while evaluating a formula.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The formula references a variable absent from the assignment.
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),

    /// The token sequence does not conform to the grammar.
    #[error("malformed formula: {0}")]
    Malformed(#[from] MalformedError),

    /// The `2^n` assignments over this many variables cannot be enumerated.
    #[error("cannot enumerate assignments over {count} variables")]
    TooManyVariables { count: usize },
}

impl EvalError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, EvalError::Malformed(_))
    }

    pub fn is_unknown_variable(&self) -> bool {
        matches!(self, EvalError::UnknownVariable(_))
    }
}
