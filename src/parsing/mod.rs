
//! Tokenizing and parsing of infix expressions.

pub mod grammar;
pub mod operator;
pub mod pattern;
pub mod pratt;
pub mod source;
pub mod tokenizer;

use grammar::Grammar;
use crate::ast::Node;
use crate::error::ParseError;

/// Parses `source` with the [arithmetic grammar](Grammar::arithmetic).
pub fn parse(source: &str) -> Result<Node, ParseError> {
  parse_with(Grammar::arithmetic(), source)
}

/// Parses `source` with the given grammar.
pub fn parse_with(grammar: &Grammar, source: &str) -> Result<Node, ParseError> {
  grammar.parse(source)
}
