//! Formula tokens.
//!
//! A formula is a flat sequence of [`Token`]s. A token is either one of the
//! eight fixed [`Operator`] symbols, or a variable name (any other string).

use std::fmt;

/// Operator tokens, including parentheses.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Iff,
    LeftParen,
    RightParen,
}

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Implies,
        Operator::Iff,
        Operator::LeftParen,
        Operator::RightParen,
    ];

    /// The exact token string for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Xor => "xor",
            Operator::Implies => "->",
            Operator::Iff => "<->",
            Operator::LeftParen => "(",
            Operator::RightParen => ")",
        }
    }

    /// The canonical display glyph, also used inside sub-expression labels.
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Not => "¬",
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Xor => "⊕",
            Operator::Implies => "→",
            Operator::Iff => "↔",
            Operator::LeftParen => "(",
            Operator::RightParen => ")",
        }
    }

    /// Classify a raw token string.
    pub fn from_symbol(s: &str) -> Option<Operator> {
        match s {
            "!" => Some(Operator::Not),
            "&&" => Some(Operator::And),
            "||" => Some(Operator::Or),
            "xor" => Some(Operator::Xor),
            "->" => Some(Operator::Implies),
            "<->" => Some(Operator::Iff),
            "(" => Some(Operator::LeftParen),
            ")" => Some(Operator::RightParen),
            _ => None,
        }
    }

    /// Apply a binary connective to its operands.
    ///
    /// Returns `None` for `Not` and the parentheses.
    pub fn apply(self, lhs: bool, rhs: bool) -> Option<bool> {
        match self {
            Operator::And => Some(lhs && rhs),
            Operator::Or => Some(lhs || rhs),
            Operator::Xor => Some(lhs ^ rhs),
            Operator::Implies => Some(!lhs || rhs),
            Operator::Iff => Some(lhs == rhs),
            Operator::Not | Operator::LeftParen | Operator::RightParen => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single formula symbol.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Token {
    Op(Operator),
    Var(String),
}

impl Token {
    /// Classify a raw token: operator symbols become [`Token::Op`], anything else is a variable.
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        match Operator::from_symbol(&s) {
            Some(op) => Token::Op(op),
            None => Token::Var(s),
        }
    }

    /// A variable token, without classification.
    ///
    /// `name` must not be an operator symbol; use [`Token::new`] for raw input.
    pub fn var(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(
            Operator::from_symbol(&name).is_none(),
            "operator symbol '{}' used as a variable name",
            name
        );
        Token::Var(name)
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Op(_))
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Token::Op(op) => Some(*op),
            Token::Var(_) => None,
        }
    }

    /// Variable name, if this token is a (non-empty) variable.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Token::Var(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    /// The raw token text, as it was appended.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Op(op) => op.symbol(),
            Token::Var(name) => name,
        }
    }

    /// The human-facing rendering: operators become glyphs, variables stay as-is.
    pub fn display_glyph(&self) -> &str {
        match self {
            Token::Op(op) => op.glyph(),
            Token::Var(name) => name,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Op(op)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::new(s)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::new(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convert a slice of raw strings into tokens.
pub fn tokenize<S: AsRef<str>>(raw: &[S]) -> Vec<Token> {
    raw.iter().map(|s| Token::new(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_symbol_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Token::new("&&"), Token::Op(Operator::And));
        assert_eq!(Token::new("xor"), Token::Op(Operator::Xor));
        assert_eq!(Token::new("<->"), Token::Op(Operator::Iff));
        assert_eq!(Token::new("P"), Token::var("P"));
        // Only exact symbols are operators.
        assert_eq!(Token::new("XOR"), Token::var("XOR"));
        assert_eq!(Token::new("&"), Token::var("&"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "used as a variable name")]
    fn test_var_rejects_operator_symbol() {
        let _ = Token::var("->");
    }

    #[test]
    fn test_glyphs() {
        let tokens = tokenize(&["&&", "||", "!", "xor", "<->", "->", "(", ")", "A"]);
        let glyphs: Vec<&str> = tokens
            .iter()
            .map(|t| t.display_glyph())
            .collect();
        assert_eq!(glyphs, ["∧", "∨", "¬", "⊕", "↔", "→", "(", ")", "A"]);
    }

    #[test]
    fn test_apply() {
        for lhs in [false, true] {
            for rhs in [false, true] {
                assert_eq!(Operator::And.apply(lhs, rhs), Some(lhs && rhs));
                assert_eq!(Operator::Or.apply(lhs, rhs), Some(lhs || rhs));
                assert_eq!(Operator::Xor.apply(lhs, rhs), Some(lhs != rhs));
                assert_eq!(Operator::Iff.apply(lhs, rhs), Some(lhs == rhs));
                assert_eq!(Operator::Implies.apply(lhs, rhs), Some(!lhs || rhs));
            }
        }
        assert_eq!(Operator::Not.apply(true, true), None);
        assert_eq!(Operator::LeftParen.apply(true, true), None);
    }

    #[test]
    fn test_empty_is_not_a_variable() {
        assert_eq!(Token::new("").as_var(), None);
        assert_eq!(Token::new("Q").as_var(), Some("Q"));
    }
}
