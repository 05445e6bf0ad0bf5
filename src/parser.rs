//! Recursive-descent evaluation of token sequences.
//!
//! The grammar, from loosest to tightest binding:
//!
//! ```text
//! Equivalence := Implication ( "<->" Implication )*
//! Implication := OrXor ( "->" Implication )?
//! OrXor       := And ( ("||" | "xor") And )*
//! And         := Not ( "&&" Not )*
//! Not         := "!" Not | Primary
//! Primary     := "(" Equivalence ")" | Variable
//! ```
//!
//! All binary levels fold left-to-right, except implication, whose right
//! operand is itself a full implication (`a -> b -> c` is `a -> (b -> c)`).
//!
//! Parsing and evaluation happen in one pass: every rule returns the truth
//! value of the node it matched together with its label, and every fired
//! connective is recorded into a [`Trace`].

use log::debug;

use crate::assignment::Assignment;
use crate::error::{EvalError, MalformedError};
use crate::limits::Limits;
use crate::token::{Operator, Token};
use crate::trace::Trace;

const END_OF_INPUT: &str = "end of input";

/// A parsed and evaluated node.
#[derive(Debug, Clone)]
struct Node {
    value: bool,
    label: String,
    /// Whether the label is already wrapped in its own outer parentheses.
    enclosed: bool,
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    variables: &'a [String],
    assignment: &'a Assignment,
    limits: Limits,
    pos: usize,
    depth: usize,
    trace: Trace,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`.
    ///
    /// `variables` are the formula's variable names; labels equal to one of
    /// them are never recorded as sub-expressions.
    pub fn new(tokens: &'a [Token], variables: &'a [String], assignment: &'a Assignment, limits: Limits) -> Self {
        Self {
            tokens,
            variables,
            assignment,
            limits,
            pos: 0,
            depth: 0,
            trace: Trace::new(),
        }
    }

    /// Parse the whole token sequence, returning its value and the trace.
    pub fn evaluate(mut self) -> Result<(bool, Trace), EvalError> {
        let node = self.equivalence()?;
        if let Some(token) = self.peek() {
            return Err(self.unexpected("end of input", Some(token)));
        }
        debug!("evaluate: {} = {}", node.label, node.value);
        Ok((node.value, self.trace))
    }

    fn equivalence(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.implication()?;
        while self.eat(Operator::Iff) {
            let rhs = self.implication()?;
            lhs = self.binary(Operator::Iff, lhs, rhs);
        }
        Ok(lhs)
    }

    fn implication(&mut self) -> Result<Node, EvalError> {
        let lhs = self.or_xor()?;
        if self.eat(Operator::Implies) {
            self.enter()?;
            let rhs = self.implication()?;
            self.leave();
            return Ok(self.binary(Operator::Implies, lhs, rhs));
        }
        Ok(lhs)
    }

    fn or_xor(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.and()?;
        loop {
            let op = if self.eat(Operator::Or) {
                Operator::Or
            } else if self.eat(Operator::Xor) {
                Operator::Xor
            } else {
                break;
            };
            let rhs = self.and()?;
            lhs = self.binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Node, EvalError> {
        let mut lhs = self.not()?;
        while self.eat(Operator::And) {
            let rhs = self.not()?;
            lhs = self.binary(Operator::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn not(&mut self) -> Result<Node, EvalError> {
        if !self.eat(Operator::Not) {
            return self.primary();
        }
        self.enter()?;
        let inner = self.not()?;
        self.leave();
        let node = Node {
            value: !inner.value,
            label: format!("{}{}", Operator::Not.glyph(), inner.label),
            enclosed: false,
        };
        self.record(&node);
        Ok(node)
    }

    fn primary(&mut self) -> Result<Node, EvalError> {
        if self.eat(Operator::LeftParen) {
            self.enter()?;
            let inner = self.equivalence()?;
            self.expect(Operator::RightParen)?;
            self.leave();
            // A group is decoration only: no trace entry of its own.
            let label = if inner.enclosed {
                inner.label
            } else {
                format!("({})", inner.label)
            };
            return Ok(Node {
                value: inner.value,
                label,
                enclosed: true,
            });
        }

        match self.peek() {
            Some(token) => match token.as_var() {
                Some(name) => {
                    let value = self
                        .assignment
                        .get(name)
                        .ok_or_else(|| EvalError::UnknownVariable(name.to_string()))?;
                    self.pos += 1;
                    Ok(Node {
                        value,
                        label: name.to_string(),
                        enclosed: false,
                    })
                }
                None => Err(self.unexpected("variable", Some(token))),
            },
            None => Err(self.unexpected("variable", None)),
        }
    }

    fn binary(&mut self, op: Operator, lhs: Node, rhs: Node) -> Node {
        let value = op
            .apply(lhs.value, rhs.value)
            .unwrap_or_else(|| unreachable!("'{}' is not a binary connective", op));
        let node = Node {
            value,
            label: format!("({}{}{})", lhs.label, op.glyph(), rhs.label),
            enclosed: true,
        };
        self.record(&node);
        node
    }

    fn record(&mut self, node: &Node) {
        if node.label.is_empty() || self.variables.iter().any(|v| *v == node.label) {
            return;
        }
        debug!("subexpression {} = {}", node.label, node.value);
        self.trace.record(&node.label, node.value);
    }

    /// Go one nesting level deeper, failing once the depth limit is exceeded.
    ///
    /// Any error aborts the whole parse, so only successful descents `leave`.
    fn enter(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.limits.max_depth {
            return Err(MalformedError::TooDeep {
                limit: self.limits.max_depth,
            }
            .into());
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, op: Operator) -> bool {
        match self.peek() {
            Some(Token::Op(found)) if *found == op => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, op: Operator) -> Result<(), EvalError> {
        if self.eat(op) {
            return Ok(());
        }
        let expected = match op {
            Operator::RightParen => "')'",
            _ => op.symbol(),
        };
        Err(self.unexpected(expected, self.peek()))
    }

    fn unexpected(&self, expected: &'static str, found: Option<&Token>) -> EvalError {
        let found = found.map_or_else(|| END_OF_INPUT.to_string(), |t| t.as_str().to_string());
        MalformedError::Unexpected {
            position: self.pos,
            expected,
            found,
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::token::tokenize;

    fn run(raw: &[&str], values: &[(&str, bool)]) -> Result<(bool, Trace), EvalError> {
        let tokens = tokenize(raw);
        let variables: Vec<String> = values.iter().map(|(v, _)| v.to_string()).collect();
        let assignment: Assignment = values.iter().copied().collect();
        Parser::new(&tokens, &variables, &assignment, Limits::default()).evaluate()
    }

    #[test]
    fn test_single_variable() {
        let (value, trace) = run(&["A"], &[("A", true)]).unwrap();
        assert!(value);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_group_of_variable_is_not_recorded() {
        let (value, trace) = run(&["(", "(", "A", ")", ")"], &[("A", false)]).unwrap();
        assert!(!value);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_double_negation() {
        let (value, trace) = run(&["!", "!", "A"], &[("A", true)]).unwrap();
        assert!(value);
        assert_eq!(trace.entries(), &[("¬A".to_string(), false), ("¬¬A".to_string(), true)]);
    }

    #[test]
    fn test_negated_group() {
        let (value, trace) = run(&["!", "(", "A", "&&", "B", ")"], &[("A", true), ("B", true)]).unwrap();
        assert!(!value);
        assert_eq!(trace.labels().collect::<Vec<_>>(), ["(A∧B)", "¬(A∧B)"]);
    }

    #[test]
    fn test_group_labels() {
        let (_, trace) = run(&["(", "!", "A", ")", "&&", "(", "B", ")"], &[("A", true), ("B", true)]).unwrap();
        assert_eq!(trace.labels().collect::<Vec<_>>(), ["¬A", "((¬A)∧(B))"]);
    }

    #[test]
    fn test_or_xor_interleave() {
        // (A ∨ B) ⊕ C, folded left.
        let (value, trace) = run(&["A", "||", "B", "xor", "C"], &[("A", true), ("B", false), ("C", true)]).unwrap();
        assert!(!value);
        assert_eq!(trace.labels().collect::<Vec<_>>(), ["(A∨B)", "((A∨B)⊕C)"]);
    }

    #[test]
    fn test_iff_is_loosest() {
        let (value, trace) = run(&["A", "<->", "B", "->", "A"], &[("A", false), ("B", true)]).unwrap();
        // A ↔ (B → A) = F ↔ F
        assert!(value);
        assert_eq!(trace.labels().collect::<Vec<_>>(), ["(B→A)", "(A↔(B→A))"]);
    }

    #[test]
    fn test_duplicate_label_keeps_first_position() {
        let (value, trace) =
            run(&["(", "A", "&&", "B", ")", "||", "(", "A", "&&", "B", ")"], &[("A", true), ("B", false)]).unwrap();
        assert!(!value);
        assert_eq!(trace.labels().collect::<Vec<_>>(), ["(A∧B)", "((A∧B)∨(A∧B))"]);
    }

    #[test]
    fn test_trailing_tokens() {
        let err = run(&["A", "B"], &[("A", true), ("B", true)]).unwrap_err();
        assert_eq!(
            err,
            EvalError::Malformed(MalformedError::Unexpected {
                position: 1,
                expected: "end of input",
                found: "B".to_string(),
            })
        );

        let err = run(&["A", ")"], &[("A", true)]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_operator_in_operand_position() {
        let err = run(&["&&", "A"], &[("A", true)]).unwrap_err();
        assert_eq!(
            err,
            EvalError::Malformed(MalformedError::Unexpected {
                position: 0,
                expected: "variable",
                found: "&&".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_close_paren() {
        let err = run(&["(", "A"], &[("A", true)]).unwrap_err();
        assert_eq!(
            err,
            EvalError::Malformed(MalformedError::Unexpected {
                position: 2,
                expected: "')'",
                found: "end of input".to_string(),
            })
        );
    }

    #[test]
    fn test_empty() {
        let err = run(&[], &[]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_empty_token() {
        let err = run(&["A", "&&", ""], &[("A", true)]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_depth_limit() {
        let tokens = tokenize(&["!"; 10]).into_iter().chain([Token::var("A")]).collect::<Vec<_>>();
        let variables = vec!["A".to_string()];
        let assignment: Assignment = [("A", true)].into_iter().collect();

        let result = Parser::new(&tokens, &variables, &assignment, Limits::new(10)).evaluate();
        assert!(result.is_ok());

        let result = Parser::new(&tokens, &variables, &assignment, Limits::new(9)).evaluate();
        assert_eq!(result.unwrap_err(), EvalError::Malformed(MalformedError::TooDeep { limit: 9 }));
    }

    #[test]
    fn test_long_implication_chain_hits_limit() {
        let mut raw = vec!["A"];
        for _ in 0..100 {
            raw.extend(["->", "A"]);
        }
        let tokens = tokenize(&raw);
        let variables = vec!["A".to_string()];
        let assignment: Assignment = [("A", true)].into_iter().collect();

        let result = Parser::new(&tokens, &variables, &assignment, Limits::new(50)).evaluate();
        assert!(matches!(result, Err(EvalError::Malformed(MalformedError::TooDeep { .. }))));

        let (value, trace) = Parser::new(&tokens, &variables, &assignment, Limits::permissive()).evaluate().unwrap();
        assert!(value);
        assert_eq!(trace.len(), 100);
    }
}
