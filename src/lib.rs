//! # truth-rs: propositional formulas and truth tables
//!
//! **`truth-rs`** evaluates propositional formulas given as token sequences,
//! traces the value of every distinct sub-expression, and enumerates all truth
//! assignments to build complete truth tables.
//!
//! ## Tokens
//!
//! A formula is a flat sequence of tokens. The operator vocabulary is fixed:
//!
//! | Token  | Connective  | Glyph |
//! |--------|-------------|-------|
//! | `!`    | NOT         | `¬`   |
//! | `&&`   | AND         | `∧`   |
//! | `\|\|` | OR          | `∨`   |
//! | `xor`  | XOR         | `⊕`   |
//! | `->`   | IMPLIES     | `→`   |
//! | `<->`  | IFF         | `↔`   |
//! | `(` `)`| grouping    |       |
//!
//! Any other token is a variable name. Precedence, tightest first, is
//! NOT, AND, OR/XOR, IMPLIES, IFF. Implication associates to the right,
//! every other binary connective to the left.
//!
//! ## Sub-expression labels
//!
//! Every connective that fires during evaluation yields a labelled node:
//! `(L∧R)` for binary nodes, `¬L` for negations. Labels are built from the
//! formula's structure only, so they are the same under every assignment and
//! serve as truth-table column headers. Identical labels collapse into one
//! column, placed where the label first appeared.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_rs::formula::Formula;
//! use truth_rs::table::TruthTable;
//!
//! let mut formula = Formula::new();
//! for token in ["A", "&&", "B", "||", "C"] {
//!     formula.append(token);
//! }
//! assert_eq!(formula.render_display(), "A ∧ B ∨ C");
//!
//! let table = TruthTable::solve(&formula).unwrap().unwrap();
//! assert_eq!(table.headers(), ["A", "B", "C", "(A∧B)", "((A∧B)∨C)"]);
//! assert_eq!(table.rows().len(), 8);
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: the token buffer callers assemble.
//! - **[`engine`]**: the [`Engine`][crate::engine::Engine], which evaluates a formula snapshot.
//! - **[`table`]**: whole truth tables.
//! - **[`command`]**: the closed set of buffer commands for front ends.

pub mod assignment;
pub mod command;
pub mod engine;
pub mod error;
pub mod formula;
pub mod limits;
pub mod parser;
pub mod table;
pub mod token;
pub mod trace;
