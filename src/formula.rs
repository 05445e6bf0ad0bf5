//! The formula buffer.
//!
//! Callers assemble a formula one token at a time. The buffer never parses or
//! validates; malformed sequences are stored as-is and only rejected when
//! evaluated.

use std::fmt;

use crate::token::Token;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Formula {
    tokens: Vec<Token>,
}

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, token: impl Into<Token>) {
        self.tokens.push(token.into());
    }

    /// Remove the last token. No-op on an empty buffer.
    pub fn remove_last(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Human-readable rendering: tokens joined by a single space, operators shown as glyphs.
    pub fn render_display(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.display_glyph())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_display())
    }
}

impl<T: Into<Token>> FromIterator<T> for Formula {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<Token>> Extend<T> for Formula {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tokens.extend(iter.into_iter().map(Into::into));
    }
}
