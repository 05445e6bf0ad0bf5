//! Sub-expression traces.
//!
//! A [`Trace`] is an ordered store of `(label, value)` pairs keyed by label:
//! the first insertion of a label fixes its position, later insertions only
//! refresh its value.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Trace {
    entries: Vec<(String, bool)>,
    index: HashMap<String, usize>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `label` with `value`.
    ///
    /// Returns `true` if the label was not known before.
    pub fn record(&mut self, label: &str, value: bool) -> bool {
        match self.index.get(label) {
            Some(&i) => {
                self.entries[i].1 = value;
                false
            }
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push((label.to_string(), value));
                true
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<bool> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in order of first appearance.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Entries in order of first appearance, each holding its latest value.
    pub fn entries(&self) -> &[(String, bool)] {
        &self.entries
    }
}
