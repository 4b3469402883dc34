
//! Precedence-climbing (Pratt) parsing engine.
//!
//! The engine knows nothing about particular operators. It asks the
//! [`Grammar`] whether the lookahead token is a term, whether it has a
//! [`Nud`] (behavior at the start of an operand), and whether it has a
//! [`Led`] (behavior after a complete operand), and dispatches
//! accordingly.

use super::grammar::Grammar;
use super::operator::{BindingPower, FixityTypes, Nud, Led};
use super::tokenizer::{Token, Tokenizer};
use crate::ast::Node;
use crate::error::{ParseError, Expected};

/// Parsing behavior of a token which begins an operand.
pub trait NullDenotation {
  /// Parses the rest of the operand. The token itself has already
  /// been consumed.
  fn parse_nud(&self, parser: &mut PrattParser<'_>) -> Result<Node, ParseError>;
}

/// Parsing behavior of a token which continues an expression after a
/// complete left operand.
pub trait LeftDenotation {
  /// Binding power deciding whether this token continues the
  /// expression currently being parsed.
  fn left_binding_power(&self) -> BindingPower;

  /// Combines `lhs` with whatever follows. The token itself has
  /// already been consumed.
  fn parse_led(&self, parser: &mut PrattParser<'_>, lhs: Node) -> Result<Node, ParseError>;
}

/// Parser state for a single input. Created per parse and consumed by
/// [`PrattParser::parse`].
#[derive(Debug)]
pub struct PrattParser<'a> {
  grammar: &'a Grammar,
  tokenizer: Tokenizer<'a>,
  depth: usize,
}

impl<'a> PrattParser<'a> {
  pub fn new(grammar: &'a Grammar, source: &'a str) -> Result<Self, ParseError> {
    let tokenizer = grammar.tokenizer(source)?;
    Ok(Self { grammar, tokenizer, depth: 0 })
  }

  pub fn grammar(&self) -> &'a Grammar {
    self.grammar
  }

  pub fn peek(&self) -> &Token {
    self.tokenizer.peek()
  }

  /// Consumes and returns the lookahead token.
  pub fn advance(&mut self) -> Result<Token, ParseError> {
    Ok(self.tokenizer.advance()?)
  }

  /// Parses a complete expression followed by end-of-input.
  pub fn parse(mut self) -> Result<Node, ParseError> {
    let end_of_input = self.grammar.end_of_input().clone();
    let result = self.parse_until(BindingPower::MIN, &end_of_input);
    if let Err(err) = &result {
      log::debug!("parse failed: {err}");
    }
    result
  }

  /// Parses an expression at `min_bp` and then requires the lookahead
  /// to be `terminator`. The terminator is not consumed.
  pub fn parse_until(&mut self, min_bp: BindingPower, terminator: &Token) -> Result<Node, ParseError> {
    let expr = self.parse_expression(min_bp)?;
    if self.peek() != terminator {
      return Err(self.unexpected(Expected::Token(terminator.clone())));
    }
    Ok(expr)
  }

  /// Parses an expression, continuing through every operator whose
  /// binding power is at least `min_bp`.
  pub fn parse_expression(&mut self, min_bp: BindingPower) -> Result<Node, ParseError> {
    if self.depth >= self.grammar.max_depth() {
      return Err(ParseError::TooDeep { limit: self.grammar.max_depth(), span: self.tokenizer.span() });
    }
    self.depth += 1;
    let result = self.parse_expression_at_depth(min_bp);
    self.depth -= 1;
    result
  }

  fn parse_expression_at_depth(&mut self, min_bp: BindingPower) -> Result<Node, ParseError> {
    let grammar = self.grammar;
    let mut expr = self.parse_primary()?;
    while let Some(led) = grammar.led(self.peek()) {
      if led.left_binding_power() < min_bp {
        break;
      }
      self.advance()?;
      expr = led.parse_led(self, expr)?;
    }
    Ok(expr)
  }

  fn parse_primary(&mut self) -> Result<Node, ParseError> {
    let grammar = self.grammar;
    if grammar.is_term(self.peek()) {
      let token = self.advance()?;
      return Ok(Node::term(token.kind, token.value));
    }
    if let Some(nud) = grammar.nud(self.peek()) {
      self.advance()?;
      return nud.parse_nud(self);
    }
    if grammar.is_operator(self.peek()) {
      let roles = grammar.operators().fixity_types(&self.peek().value);
      if roles.intersects(FixityTypes::INFIX | FixityTypes::POSTFIX) {
        log::debug!("operator {} cannot begin an operand (roles: {:?})", self.peek(), roles);
      }
    }
    Err(self.unexpected(Expected::Primary))
  }

  fn unexpected(&self, expected: Expected) -> ParseError {
    ParseError::UnexpectedToken {
      token: self.peek().clone(),
      expected,
      span: self.tokenizer.span(),
    }
  }
}

impl NullDenotation for Nud {
  fn parse_nud(&self, parser: &mut PrattParser<'_>) -> Result<Node, ParseError> {
    match self {
      Nud::Prefix(props) => {
        let arg = parser.parse_expression(props.precedence())?;
        log::trace!("applying prefix {}", props.tag());
        Ok(Node::unary(props.tag(), arg))
      }
      Nud::Group(props) => {
        let closing = parser.grammar().operator_token(props.closing());
        let inner = parser.parse_until(props.inner_precedence(), &closing)?;
        parser.advance()?;
        Ok(inner)
      }
    }
  }
}

impl LeftDenotation for Led {
  fn left_binding_power(&self) -> BindingPower {
    self.binding_power()
  }

  fn parse_led(&self, parser: &mut PrattParser<'_>, lhs: Node) -> Result<Node, ParseError> {
    match self {
      Led::Infix(props) => {
        let rhs = parser.parse_expression(props.right_precedence())?;
        log::trace!("applying infix {}", props.tag());
        Ok(Node::binary(props.tag(), lhs, rhs))
      }
      Led::Postfix(props) => {
        log::trace!("applying postfix {}", props.tag());
        Ok(Node::unary(props.tag(), lhs))
      }
    }
  }
}
