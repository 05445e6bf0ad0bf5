//! Truth assignments.
//!
//! An [`Assignment`] maps variable names to truth values. For a sorted
//! variable list of length `n` there are exactly `2^n` assignments, produced
//! by [`assignments`] in canonical order: assignment `i` sets the variable at
//! sorted position `j` to bit `j` of `i`, so the first variable toggles
//! fastest.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::EvalError;

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: BTreeMap<String, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: bool) -> Option<bool> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in lexicographic name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Values of the given variables, in the given order.
    ///
    /// Returns `None` if some variable is unassigned.
    pub fn values_of<S: AsRef<str>>(&self, variables: &[S]) -> Option<Vec<bool>> {
        variables.iter().map(|v| self.get(v.as_ref())).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, if value { "T" } else { "F" })?;
        }
        write!(f, "}}")
    }
}

/// Bit `j` of `index`; zero past the width of `usize`.
fn bit(index: usize, j: usize) -> bool {
    u32::try_from(j)
        .ok()
        .and_then(|j| index.checked_shr(j))
        .is_some_and(|shifted| shifted & 1 == 1)
}

/// Build the assignment with the given canonical `index`.
pub fn assignment_at<S: AsRef<str>>(variables: &[S], index: usize) -> Assignment {
    variables
        .iter()
        .enumerate()
        .map(|(j, v)| (v.as_ref(), bit(index, j)))
        .collect()
}

/// Number of assignments over `n` variables, or `None` if it does not fit in `usize`.
pub fn assignment_count(n: usize) -> Option<usize> {
    u32::try_from(n).ok().and_then(|n| 1usize.checked_shl(n))
}

/// All `2^n` assignments over the sorted `variables`, in canonical order.
///
/// With no variables, yields a single empty assignment. Fails if `2^n` does
/// not fit in `usize`.
pub fn assignments<S: AsRef<str>>(variables: &[S]) -> Result<impl Iterator<Item = Assignment> + '_, EvalError> {
    let count = assignment_count(variables.len()).ok_or(EvalError::TooManyVariables {
        count: variables.len(),
    })?;
    Ok((0..count).map(move |i| assignment_at(variables, i)))
}
