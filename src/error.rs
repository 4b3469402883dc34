
use crate::parsing::source::Span;
use crate::parsing::tokenizer::{Token, TokenizerError};

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// Errors produced while parsing. Parsing stops at the first error;
/// no partial tree is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
  #[error("{0}")]
  TokenizerError(#[from] TokenizerError),
  #[error("Expected {expected}, but found {token} at {span}")]
  UnexpectedToken {
    token: Token,
    expected: Expected,
    span: Span,
  },
  #[error("Expression nested more than {limit} levels deep at {span}")]
  TooDeep {
    limit: usize,
    span: Span,
  },
}

/// Broad classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
  /// The input contains text that is not a token.
  Lexical,
  /// The tokens do not form an expression.
  UnexpectedToken,
  /// The input is nested beyond the grammar's limit.
  TooDeep,
  /// The grammar itself is defective, for instance its token pattern
  /// can match the empty string.
  Internal,
}

/// What the parser needed when it encountered an unexpected token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
  /// The start of an operand: a term, a prefix operator, or a group.
  Primary,
  /// A specific token, such as a closing delimiter or end-of-input.
  Token(Token),
}

impl ParseError {
  pub fn kind(&self) -> ParseErrorKind {
    match self {
      ParseError::TokenizerError(TokenizerError::UnexpectedChar(..)) => ParseErrorKind::Lexical,
      ParseError::TokenizerError(TokenizerError::EmptyMatch(_)) => ParseErrorKind::Internal,
      ParseError::UnexpectedToken { .. } => ParseErrorKind::UnexpectedToken,
      ParseError::TooDeep { .. } => ParseErrorKind::TooDeep,
    }
  }

  pub fn span(&self) -> Span {
    match self {
      ParseError::TokenizerError(TokenizerError::UnexpectedChar(ch, pos)) =>
        Span::new(*pos, *pos + ch.len_utf8()),
      ParseError::TokenizerError(TokenizerError::EmptyMatch(pos)) => Span::empty_at(*pos),
      ParseError::UnexpectedToken { span, .. } => *span,
      ParseError::TooDeep { span, .. } => *span,
    }
  }
}

impl Display for Expected {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expected::Primary => write!(f, "an operand"),
      Expected::Token(token) => write!(f, "{token}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::SourceOffset;

  #[test]
  fn test_kind() {
    let err = ParseError::from(TokenizerError::UnexpectedChar('#', SourceOffset(2)));
    assert_eq!(err.kind(), ParseErrorKind::Lexical);
    assert_eq!(err.span(), Span::new(SourceOffset(2), SourceOffset(3)));

    let err = ParseError::from(TokenizerError::EmptyMatch(SourceOffset(0)));
    assert_eq!(err.kind(), ParseErrorKind::Internal);
  }

  #[test]
  fn test_unexpected_token_message() {
    let err = ParseError::UnexpectedToken {
      token: Token::new("eof", ""),
      expected: Expected::Token(Token::new("op", ")")),
      span: Span::empty_at(SourceOffset(6)),
    };
    assert_eq!(err.to_string(), "Expected ')', but found <eof> at 6");
    assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
  }

  #[test]
  fn test_primary_message() {
    let err = ParseError::UnexpectedToken {
      token: Token::new("op", "*"),
      expected: Expected::Primary,
      span: Span::new(SourceOffset(4), SourceOffset(5)),
    };
    assert_eq!(err.to_string(), "Expected an operand, but found '*' at 4-5");
  }
}
