//! The logic engine.
//!
//! An [`Engine`] is built once per formula from a snapshot of its tokens and
//! is then evaluated under as many assignments as needed. Evaluation takes
//! `&self` and hands back a fresh [`Evaluation`], so the engine holds no
//! per-call state and can be shared freely.
//!
//! ```
//! use truth_rs::engine::Engine;
//! use truth_rs::token::tokenize;
//!
//! let engine = Engine::new(tokenize(&["A", "&&", "B", "||", "C"]));
//! assert_eq!(engine.variables(), ["A", "B", "C"]);
//!
//! let assignments = engine.truth_assignments().unwrap();
//! assert_eq!(assignments.len(), 8);
//!
//! let eval = engine.evaluate(&assignments[5]).unwrap(); // A=T, B=F, C=T
//! assert!(eval.value());
//! assert_eq!(eval.labels().collect::<Vec<_>>(), ["(A∧B)", "((A∧B)∨C)"]);
//! assert_eq!(eval.get("(A∧B)"), Some(false));
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::assignment::{assignment_at, assignments, Assignment};
use crate::error::EvalError;
use crate::limits::Limits;
use crate::parser::Parser;
use crate::token::Token;
use crate::trace::Trace;

/// Distinct variable names occurring in `tokens`, sorted lexicographically.
///
/// Operator tokens and empty tokens are skipped.
pub fn extract_variables(tokens: &[Token]) -> Vec<String> {
    let vars: BTreeSet<&str> = tokens.iter().filter_map(|t| t.as_var()).collect();
    vars.into_iter().map(str::to_string).collect()
}

#[derive(Debug, Clone)]
pub struct Engine {
    tokens: Vec<Token>,
    variables: Vec<String>,
    limits: Limits,
}

impl Engine {
    pub fn new(tokens: impl Into<Vec<Token>>) -> Self {
        Self::with_limits(tokens, Limits::default())
    }

    pub fn with_limits(tokens: impl Into<Vec<Token>>, limits: Limits) -> Self {
        let tokens = tokens.into();
        let variables = extract_variables(&tokens);
        debug!("engine: {} tokens, variables = {:?}", tokens.len(), variables);
        Self {
            tokens,
            variables,
            limits,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The sorted variable set.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// All `2^n` truth assignments in canonical order.
    ///
    /// Assignment `i` sets the variable at sorted position `j` to bit `j` of `i`.
    /// Fails with [`EvalError::TooManyVariables`] if `2^n` does not fit in `usize`.
    pub fn truth_assignments(&self) -> Result<Vec<Assignment>, EvalError> {
        Ok(assignments(&self.variables)?.collect())
    }

    /// Evaluate the formula under `assignment`.
    ///
    /// Fails with [`EvalError::UnknownVariable`] if the formula references a
    /// variable the assignment does not cover, and with
    /// [`EvalError::Malformed`] if the tokens do not form a formula.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<Evaluation, EvalError> {
        debug!("evaluate under {}", assignment);
        let parser = Parser::new(&self.tokens, &self.variables, assignment, self.limits);
        let (value, trace) = parser.evaluate()?;
        Ok(Evaluation { value, trace })
    }

    /// Ordered distinct sub-expression labels of the formula.
    ///
    /// Labels depend only on the formula's structure, so they are taken from
    /// the evaluation under the first canonical assignment.
    pub fn subexpression_labels(&self) -> Result<Vec<String>, EvalError> {
        let eval = self.evaluate(&assignment_at(&self.variables, 0))?;
        Ok(eval.labels().map(str::to_string).collect())
    }
}

/// The outcome of one evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    value: bool,
    trace: Trace,
}

impl Evaluation {
    /// Truth value of the whole formula.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Distinct sub-expression labels, in order of first appearance.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.trace.labels()
    }

    /// `(label, value)` pairs in label order.
    pub fn results(&self) -> &[(String, bool)] {
        self.trace.entries()
    }

    /// Value of the sub-expression with the given label.
    pub fn get(&self, label: &str) -> Option<bool> {
        self.trace.get(label)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
