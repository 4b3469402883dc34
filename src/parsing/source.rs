
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Byte offset into the text being parsed. Carried by tokens and
/// errors so that failures can be reported against the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceOffset(pub usize);

/// A half-open range of source offsets: `start` is included and `end`
/// is excluded. The end-of-input token has an empty span positioned
/// at the end of the text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
  pub start: SourceOffset,
  pub end: SourceOffset,
}

impl Span {
  pub fn new(start: SourceOffset, end: SourceOffset) -> Self {
    Self { start, end }
  }

  /// An empty span at the given position.
  pub fn empty_at(pos: SourceOffset) -> Self {
    Self { start: pos, end: pos }
  }

  pub fn len(&self) -> usize {
    self.end.0.saturating_sub(self.start.0)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl From<usize> for SourceOffset {
  fn from(i: usize) -> Self {
    SourceOffset(i)
  }
}

impl From<SourceOffset> for usize {
  fn from(i: SourceOffset) -> Self {
    i.0
  }
}

impl Add<usize> for SourceOffset {
  type Output = Self;

  fn add(self, rhs: usize) -> Self::Output {
    Self(self.0 + rhs)
  }
}

impl Display for SourceOffset {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Display for Span {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      write!(f, "{}", self.start)
    } else {
      write!(f, "{}-{}", self.start, self.end)
    }
  }
}
