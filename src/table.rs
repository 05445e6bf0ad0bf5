//! Truth tables.
//!
//! A [`TruthTable`] is the full solve output for one formula: the variable
//! columns, the sub-expression columns, and one [`Row`] per truth assignment
//! in canonical order.

use std::fmt;

use log::debug;

use crate::assignment::assignments;
use crate::engine::Engine;
use crate::error::EvalError;
use crate::formula::Formula;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Variable values, in variable order.
    pub inputs: Vec<bool>,
    /// Sub-expression values, in label order.
    pub outputs: Vec<bool>,
    /// Value of the whole formula.
    pub value: bool,
}

impl Row {
    /// All cells of the row: inputs followed by outputs.
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.inputs.iter().chain(self.outputs.iter()).copied()
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<String>,
    labels: Vec<String>,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Solve the formula in the buffer.
    ///
    /// An empty formula is not solved at all and yields `Ok(None)`.
    pub fn solve(formula: &Formula) -> Result<Option<TruthTable>, EvalError> {
        if formula.is_empty() {
            debug!("solve: empty formula, skipping");
            return Ok(None);
        }
        let engine = Engine::new(formula.tokens());
        engine.truth_table().map(Some)
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Column headers: variables followed by sub-expression labels.
    pub fn headers(&self) -> Vec<&str> {
        self.variables
            .iter()
            .chain(self.labels.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.variables.len() + self.labels.len()
    }
}

impl Engine {
    /// Evaluate the formula under every assignment, in canonical order.
    pub fn truth_table(&self) -> Result<TruthTable, EvalError> {
        let variables = self.variables().to_vec();
        let labels = self.subexpression_labels()?;
        debug!(
            "truth_table: {} variables, {} sub-expressions",
            variables.len(),
            labels.len()
        );

        let rows = assignments(&variables)?
            .map(|assignment| {
                let eval = self.evaluate(&assignment)?;
                // Labels are structural, so every evaluation yields them in
                // the same order.
                debug_assert!(eval.labels().eq(labels.iter().map(String::as_str)));
                let inputs = variables.iter().map(|v| assignment.get(v) == Some(true)).collect();
                let outputs = eval.results().iter().map(|&(_, value)| value).collect();
                Ok::<_, EvalError>(Row {
                    inputs,
                    outputs,
                    value: eval.value(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TruthTable {
            variables,
            labels,
            rows,
        })
    }
}

fn cell(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headers().join(" | "))?;
        for row in &self.rows {
            let cells: Vec<&str> = row.cells().map(cell).collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::token::{tokenize, Token};

    #[test]
    fn test_solve_empty() {
        assert_eq!(TruthTable::solve(&Formula::new()), Ok(None));
    }

    #[test]
    fn test_solve() {
        let formula: Formula = ["A", "xor", "B"].into_iter().collect();
        let table = TruthTable::solve(&formula).unwrap().unwrap();

        assert_eq!(table.headers(), ["A", "B", "(A⊕B)"]);
        assert_eq!(table.num_columns(), 3);
        let rows: Vec<Vec<bool>> = table.rows().iter().map(|r| r.cells().collect()).collect();
        assert_eq!(
            rows,
            vec![
                vec![false, false, false],
                vec![true, false, true],
                vec![false, true, true],
                vec![true, true, false],
            ]
        );
    }

    #[test]
    fn test_solve_malformed() {
        let formula: Formula = ["(", "A"].into_iter().collect();
        assert!(TruthTable::solve(&formula).unwrap_err().is_malformed());
    }

    #[test]
    fn test_single_variable_has_no_subexpressions() {
        let formula: Formula = ["P"].into_iter().collect();
        let table = TruthTable::solve(&formula).unwrap().unwrap();
        assert!(table.labels().is_empty());
        assert_eq!(table.rows().len(), 2);
        assert!(table.rows()[1].value);
    }

    #[test]
    fn test_outputs_follow_labels() {
        // Repeated sub-expressions collapse into one column, placed where the
        // label first appeared.
        let engine = Engine::new(tokenize(&["(", "A", "&&", "B", ")", "||", "!", "(", "A", "&&", "B", ")"]));
        let table = engine.truth_table().unwrap();
        assert_eq!(table.labels(), ["(A∧B)", "¬(A∧B)", "((A∧B)∨¬(A∧B))"]);
        for (assignment, row) in engine.truth_assignments().unwrap().iter().zip(table.rows()) {
            let eval = engine.evaluate(assignment).unwrap();
            let expected: Vec<bool> = table.labels().iter().map(|l| eval.get(l).unwrap()).collect();
            assert_eq!(row.outputs, expected);
            assert_eq!(row.outputs.len(), table.labels().len());
            assert!(row.value);
        }
    }

    #[test]
    fn test_too_many_variables() {
        let tokens: Vec<Token> = (0..64)
            .flat_map(|i| [Token::new("||"), Token::new(format!("v{:02}", i))])
            .skip(1)
            .collect();
        let engine = Engine::new(tokens);
        assert_eq!(
            engine.truth_table().unwrap_err(),
            EvalError::TooManyVariables { count: 64 }
        );
    }

    #[test]
    fn test_display() {
        let formula: Formula = ["!", "P"].into_iter().collect();
        let table = TruthTable::solve(&formula).unwrap().unwrap();
        assert_eq!(table.to_string(), "P | ¬P\nF | T\nT | F\n");
    }
}
