//! Input commands.
//!
//! Front ends (buttons, voice intents, key bindings) drive the formula buffer
//! through a closed set of [`Command`]s. External tag names are mapped to
//! commands by [`Command::from_tag`]; unknown tags map to nothing.

use std::fmt;

use log::debug;

use crate::error::EvalError;
use crate::formula::Formula;
use crate::table::TruthTable;
use crate::token::{Operator, Token};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    AddAnd,
    AddOr,
    AddNot,
    AddImplication,
    AddEquivalence,
    AddXor,
    AddOpenParenthesis,
    AddCloseParenthesis,
    AddVariable(String),
    Solve,
    Clear,
    DeleteLast,
}

/// What applying a command did.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The buffer was edited.
    Edited,
    /// The formula was solved; `None` if it was empty.
    Solved(Option<TruthTable>),
}

impl Command {
    /// Resolve an external tag name.
    ///
    /// Matching ignores ASCII case and underscores, so `add_and`, `AddAnd`
    /// and `addand` are the same tag.
    pub fn from_tag(tag: &str) -> Option<Command> {
        let key: String = tag
            .chars()
            .filter(|&c| c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let command = match key.as_str() {
            "addand" => Command::AddAnd,
            "addor" => Command::AddOr,
            "addnot" => Command::AddNot,
            "addimplication" => Command::AddImplication,
            "addequivalence" => Command::AddEquivalence,
            "addxor" => Command::AddXor,
            "addopenparentheses" | "addopenparenthesis" => Command::AddOpenParenthesis,
            "addclosedparentheses" | "addcloseparenthesis" => Command::AddCloseParenthesis,
            "addp" => Command::AddVariable("P".to_string()),
            "addq" => Command::AddVariable("Q".to_string()),
            "addr" => Command::AddVariable("R".to_string()),
            "adds" => Command::AddVariable("S".to_string()),
            "solveformula" | "solve" => Command::Solve,
            "clearformula" | "clear" => Command::Clear,
            "deleteformula" | "deletelast" => Command::DeleteLast,
            _ => {
                debug!("from_tag: no command for {:?}", tag);
                return None;
            }
        };
        Some(command)
    }

    /// The token this command appends, if it is an append command.
    pub fn token(&self) -> Option<Token> {
        let op = match self {
            Command::AddAnd => Operator::And,
            Command::AddOr => Operator::Or,
            Command::AddNot => Operator::Not,
            Command::AddImplication => Operator::Implies,
            Command::AddEquivalence => Operator::Iff,
            Command::AddXor => Operator::Xor,
            Command::AddOpenParenthesis => Operator::LeftParen,
            Command::AddCloseParenthesis => Operator::RightParen,
            Command::AddVariable(name) => return Some(Token::new(name.as_str())),
            Command::Solve | Command::Clear | Command::DeleteLast => return None,
        };
        Some(Token::Op(op))
    }

    /// Perform the command on `formula`.
    pub fn apply(&self, formula: &mut Formula) -> Result<Outcome, EvalError> {
        debug!("apply {}", self);
        match self {
            Command::Solve => TruthTable::solve(formula).map(Outcome::Solved),
            Command::Clear => {
                formula.clear();
                Ok(Outcome::Edited)
            }
            Command::DeleteLast => {
                formula.remove_last();
                Ok(Outcome::Edited)
            }
            _ => {
                if let Some(token) = self.token() {
                    formula.append(token);
                }
                Ok(Outcome::Edited)
            }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddVariable(name) => write!(f, "add {}", name),
            Command::Solve => write!(f, "solve"),
            Command::Clear => write!(f, "clear"),
            Command::DeleteLast => write!(f, "delete last"),
            _ => match self.token() {
                Some(token) => write!(f, "add {}", token),
                None => Ok(()),
            },
        }
    }
}
