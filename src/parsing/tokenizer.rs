
//! Regex-driven tokenizer with a single token of lookahead.

use super::pattern::TokenPattern;
use super::source::{SourceOffset, Span};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A lexical token. Equality compares the kind and the text, which is
/// how terminators such as end-of-input or a closing parenthesis are
/// recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
  pub kind: String,
  pub value: String,
}

/// Cursor over the unconsumed portion of an input string.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

/// A tokenizer over one input buffer. Created per parse and discarded
/// afterward.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
  pattern: &'a TokenPattern,
  state: TokenizerState<'a>,
  end_of_input: Token,
  current: Token,
  current_span: Span,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TokenizerError {
  #[error("Unrecognized character '{0}' at {1}")]
  UnexpectedChar(char, SourceOffset),
  /// The token pattern matched without consuming input. This is a
  /// defect in the pattern, not in the text being scanned.
  #[error("Token pattern matched the empty string at {0}")]
  EmptyMatch(SourceOffset),
}

impl Token {
  pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
    Self { kind: kind.into(), value: value.into() }
  }

  pub fn is_kind(&self, kind: &str) -> bool {
    self.kind == kind
  }
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: SourceOffset(0) }
  }

  pub fn remaining(&self) -> &'a str {
    self.input
  }

  pub fn remaining_len(&self) -> usize {
    self.input.len()
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// span skipped over. Never advances beyond the end of the input.
  pub fn advance(&mut self, mut amount: usize) -> Span {
    amount = amount.min(self.input.len());
    let start = self.position;
    self.input = &self.input[amount..];
    self.position = start + amount;
    Span::new(start, self.position)
  }
}

impl<'a> Tokenizer<'a> {
  /// Constructs a tokenizer positioned at the first token of `source`,
  /// or at `end_of_input` if `source` contains no tokens.
  pub fn new(
    source: &'a str,
    pattern: &'a TokenPattern,
    end_of_input: Token,
  ) -> Result<Self, TokenizerError> {
    let mut tokenizer = Self {
      pattern,
      state: TokenizerState::new(source),
      current: end_of_input.clone(),
      current_span: Span::default(),
      end_of_input,
    };
    tokenizer.scan()?;
    Ok(tokenizer)
  }

  /// The current lookahead token.
  pub fn peek(&self) -> &Token {
    &self.current
  }

  /// The source span of the current lookahead token.
  pub fn span(&self) -> Span {
    self.current_span
  }

  pub fn end_of_input(&self) -> &Token {
    &self.end_of_input
  }

  pub fn at_end(&self) -> bool {
    self.current == self.end_of_input
  }

  /// Consumes the current lookahead token and scans the next one.
  /// Returns the consumed token.
  pub fn advance(&mut self) -> Result<Token, TokenizerError> {
    let consumed = self.current.clone();
    self.scan()?;
    Ok(consumed)
  }

  /// Consumes the rest of the input, returning every token up to (but
  /// not including) the end-of-input token.
  pub fn collect_tokens(mut self) -> Result<Vec<Token>, TokenizerError> {
    let mut tokens = Vec::new();
    while !self.at_end() {
      tokens.push(self.advance()?);
    }
    Ok(tokens)
  }

  fn scan(&mut self) -> Result<(), TokenizerError> {
    while !self.state.is_eof() {
      let pos = self.state.current_pos();
      let Some(m) = self.pattern.match_at_start(self.state.remaining()) else {
        // Input is non-empty, so there is always a character here.
        let ch = self.state.peek().unwrap_or_default();
        return Err(TokenizerError::UnexpectedChar(ch, pos));
      };
      if m.is_empty() {
        return Err(TokenizerError::EmptyMatch(pos));
      }
      let capture = m.capture.map(|(kind, value)| Token::new(kind, value));
      let span = self.state.advance(m.len);
      if let Some(token) = capture {
        log::trace!("scanned {} token {:?} at {}", token.kind, token.value, span);
        self.current = token;
        self.current_span = span;
        return Ok(());
      }
    }
    self.current = self.end_of_input.clone();
    self.current_span = Span::empty_at(self.state.current_pos());
    Ok(())
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.value.is_empty() {
      write!(f, "<{}>", self.kind)
    } else {
      write!(f, "'{}'", self.value)
    }
  }
}
