//! Evaluation limits.

/// Resource limits for a single evaluation.
///
/// Evaluation recurses once per negation and once per chained implication,
/// and six parser frames deep per parenthesis group. An unbounded formula
/// could therefore exhaust the call stack, so formulas nested deeper than
/// `max_depth` are rejected as malformed instead. Both presets stay well
/// inside a default 2 MiB thread stack, in debug builds too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of groups, negations and implication chains.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl Limits {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Permissive limits for machine-generated formulas.
    pub fn permissive() -> Self {
        Self { max_depth: 128 }
    }
}
