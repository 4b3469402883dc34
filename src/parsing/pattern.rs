
//! Compiled token patterns.
//!
//! A token pattern is a single regular expression made of
//! alternatives. Each named alternative produces tokens whose kind is
//! the name of the group, so `(?P<num>[0-9]+)` produces `num` tokens.
//! Alternatives outside of any named group (usually whitespace) are
//! matched and skipped without producing a token.

use regex::{Regex, Captures};
use thiserror::Error;

use std::fmt::{self, Display, Formatter};

/// A token pattern, anchored at the start of whatever input it is
/// applied to.
#[derive(Clone, Debug)]
pub struct TokenPattern {
  source: String,
  regex: Regex,
  /// Capture group indices paired with group names, in group order.
  named_groups: Vec<(usize, String)>,
}

/// The result of one successful application of a [`TokenPattern`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternMatch<'h> {
  /// Total number of bytes consumed by the match.
  pub len: usize,
  /// The named alternative that matched, together with its captured
  /// text, or `None` if an ignorable alternative matched.
  pub capture: Option<(&'h str, &'h str)>,
}

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum PatternError {
  #[error("Invalid token pattern: {0}")]
  InvalidRegex(#[from] regex::Error),
  #[error("Token pattern '{0}' has no named alternatives")]
  NoNamedAlternatives(String),
}

impl TokenPattern {
  /// Compiles a token pattern. The pattern is anchored automatically
  /// and must not be anchored by the caller.
  pub fn new(source: &str) -> Result<Self, PatternError> {
    let regex = Regex::new(&format!("^(?:{source})"))?;
    let named_groups: Vec<_> = regex.capture_names()
      .enumerate()
      .filter_map(|(i, name)| name.map(|name| (i, name.to_owned())))
      .collect();
    if named_groups.is_empty() {
      return Err(PatternError::NoNamedAlternatives(source.to_owned()));
    }
    Ok(Self { source: source.to_owned(), regex, named_groups })
  }

  pub fn as_str(&self) -> &str {
    &self.source
  }

  /// The token kinds this pattern can produce, in the order the
  /// alternatives appear.
  pub fn kinds(&self) -> impl Iterator<Item = &str> {
    self.named_groups.iter().map(|(_, name)| name.as_str())
  }

  /// Matches the pattern against the start of `input`. Returns `None`
  /// if no alternative matches there.
  pub fn match_at_start<'h>(&'h self, input: &'h str) -> Option<PatternMatch<'h>> {
    let captures = self.regex.captures(input)?;
    let len = captures.get(0).map_or(0, |m| m.len());
    Some(PatternMatch { len, capture: self.first_named_capture(&captures) })
  }

  // Named groups are ordered by their opening parenthesis, so an
  // outer alternative wins over any named group nested inside it.
  fn first_named_capture<'h>(&'h self, captures: &Captures<'h>) -> Option<(&'h str, &'h str)> {
    self.named_groups.iter().find_map(|(i, name)| {
      captures.get(*i).map(|m| (name.as_str(), m.as_str()))
    })
  }
}

impl PatternMatch<'_> {
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl Display for TokenPattern {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.source)
  }
}
