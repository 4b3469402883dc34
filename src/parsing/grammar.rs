
//! Grammar configuration: everything the tokenizer and the parsing
//! engine need to know about a particular expression language.

use super::operator::{OperatorTable, Nud, Led};
use super::pattern::TokenPattern;
use super::pratt::PrattParser;
use super::tokenizer::{Token, Tokenizer, TokenizerError};
use crate::ast::Node;
use crate::error::ParseError;

use once_cell::sync::Lazy;

/// Token kinds produced by the arithmetic grammar.
pub mod kinds {
  pub const IDENT: &str = "ident";
  pub const NUM: &str = "num";
  pub const OP: &str = "op";
  pub const EOF: &str = "eof";
}

pub const DEFAULT_MAX_DEPTH: usize = 256;

const ARITHMETIC_PATTERN: &str =
  r"(?P<ident>[a-zA-Z_][a-zA-Z_0-9]*)|(?P<num>[0-9]+)|(?P<op>[+\-*/()!^])|[ \n\r\t]+";

static ARITHMETIC: Lazy<Grammar> = Lazy::new(|| {
  // unwrap: The arithmetic pattern is a compile-time constant.
  let pattern = TokenPattern::new(ARITHMETIC_PATTERN).unwrap();
  Grammar::new(pattern, Token::new(kinds::EOF, ""), OperatorTable::arithmetic())
});

/// An expression grammar. Grammars are immutable once built and can
/// be shared freely between threads; each parse creates its own
/// tokenizer.
#[derive(Debug, Clone)]
pub struct Grammar {
  pattern: TokenPattern,
  end_of_input: Token,
  term_kinds: Vec<String>,
  operator_kind: String,
  operators: OperatorTable,
  max_depth: usize,
}

impl Grammar {
  /// A grammar with the default token kinds: `ident` and `num` tokens
  /// are terms, and `op` tokens are looked up in `operators`.
  pub fn new(pattern: TokenPattern, end_of_input: Token, operators: OperatorTable) -> Self {
    Self {
      pattern,
      end_of_input,
      term_kinds: vec![kinds::IDENT.to_owned(), kinds::NUM.to_owned()],
      operator_kind: kinds::OP.to_owned(),
      operators,
      max_depth: DEFAULT_MAX_DEPTH,
    }
  }

  /// The arithmetic grammar over identifiers, integer literals, and
  /// the operators of [`OperatorTable::arithmetic`]. Built on first
  /// use.
  pub fn arithmetic() -> &'static Grammar {
    &ARITHMETIC
  }

  pub fn with_term_kinds<I, S>(mut self, kinds: I) -> Self
  where I: IntoIterator<Item = S>,
        S: Into<String> {
    self.term_kinds = kinds.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_operator_kind(mut self, kind: impl Into<String>) -> Self {
    self.operator_kind = kind.into();
    self
  }

  pub fn with_max_depth(mut self, max_depth: usize) -> Self {
    self.max_depth = max_depth;
    self
  }

  pub fn pattern(&self) -> &TokenPattern {
    &self.pattern
  }

  pub fn end_of_input(&self) -> &Token {
    &self.end_of_input
  }

  pub fn operators(&self) -> &OperatorTable {
    &self.operators
  }

  pub fn max_depth(&self) -> usize {
    self.max_depth
  }

  pub fn is_term(&self, token: &Token) -> bool {
    self.term_kinds.iter().any(|kind| token.is_kind(kind))
  }

  pub fn is_operator(&self, token: &Token) -> bool {
    token.is_kind(&self.operator_kind)
  }

  /// The operator token with the given symbol.
  pub fn operator_token(&self, symbol: &str) -> Token {
    Token::new(self.operator_kind.as_str(), symbol)
  }

  /// The prefix or grouping behavior of `token`, if it is an operator
  /// which has one.
  pub fn nud(&self, token: &Token) -> Option<&Nud> {
    if self.is_operator(token) {
      self.operators.nud(&token.value)
    } else {
      None
    }
  }

  /// The infix or postfix behavior of `token`, if it is an operator
  /// which has one.
  pub fn led(&self, token: &Token) -> Option<&Led> {
    if self.is_operator(token) {
      self.operators.led(&token.value)
    } else {
      None
    }
  }

  pub fn tokenizer<'a>(&'a self, source: &'a str) -> Result<Tokenizer<'a>, TokenizerError> {
    Tokenizer::new(source, &self.pattern, self.end_of_input.clone())
  }

  /// Splits `source` into tokens, without parsing.
  pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, TokenizerError> {
    self.tokenizer(source)?.collect_tokens()
  }

  pub fn parse(&self, source: &str) -> Result<Node, ParseError> {
    PrattParser::new(self, source)?.parse()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::{Operator, Fixity, Associativity, BindingPower};

  #[test]
  fn test_arithmetic_tokenize() {
    let tokens = Grammar::arithmetic().tokenize("x1 * (42 - y)!").unwrap();
    assert_eq!(tokens, vec![
      Token::new("ident", "x1"),
      Token::new("op", "*"),
      Token::new("op", "("),
      Token::new("num", "42"),
      Token::new("op", "-"),
      Token::new("ident", "y"),
      Token::new("op", ")"),
      Token::new("op", "!"),
    ]);
  }

  #[test]
  fn test_arithmetic_kinds() {
    let grammar = Grammar::arithmetic();
    assert!(grammar.is_term(&Token::new("ident", "a")));
    assert!(grammar.is_term(&Token::new("num", "1")));
    assert!(!grammar.is_term(&Token::new("op", "+")));
    assert!(grammar.nud(&Token::new("op", "(")).is_some());
    assert!(grammar.led(&Token::new("op", "(")).is_none());
    // Only operator tokens are looked up in the table.
    assert!(grammar.led(&Token::new("ident", "+")).is_none());
  }

  #[test]
  fn test_arithmetic_is_shared() {
    assert!(std::ptr::eq(Grammar::arithmetic(), Grammar::arithmetic()));
  }

  #[test]
  fn test_custom_grammar() {
    let pattern = TokenPattern::new(r"(?P<var>[a-z])|(?P<sym>[&|~])|\s+").unwrap();
    let operators: OperatorTable = vec![
      Operator::new("~", Fixity::new().with_prefix("not", BindingPower::new(3))),
      Operator::new("&", Fixity::new().with_infix("and", Associativity::Left, BindingPower::new(2))),
      Operator::new("|", Fixity::new().with_infix("or", Associativity::Left, BindingPower::new(1))),
    ].into_iter().collect();
    let grammar = Grammar::new(pattern, Token::new("end", ""), operators)
      .with_term_kinds(["var"])
      .with_operator_kind("sym");
    let node = grammar.parse("~a | b & c").unwrap();
    assert_eq!(node.to_string(), "(or (not a) (and b c))");
  }
}
