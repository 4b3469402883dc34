
//! Regex-driven tokenizer and table-driven Pratt parser for infix
//! arithmetic expressions.
//!
//! ```ignore
//! let tree = exparse::parse("-a ^ b")?;
//! assert_eq!(tree.to_string(), "(pow (neg a) b)");
//! ```

pub mod ast;
pub mod error;
pub mod parsing;

pub use ast::Node;
pub use error::{ParseError, ParseErrorKind, Expected};
pub use parsing::{parse, parse_with};
pub use parsing::grammar::Grammar;
