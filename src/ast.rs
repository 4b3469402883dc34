
//! Abstract syntax trees produced by the parser.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// A node in a parse tree. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
  /// A leaf, carrying the kind and text of the token it came from.
  Term { kind: String, value: String },
  /// A prefix or postfix operator applied to one operand.
  Unary { op: String, arg: Box<Node> },
  /// An infix operator applied to two operands.
  Binary { op: String, lhs: Box<Node>, rhs: Box<Node> },
}

impl Node {
  /// Convenience constructor for [`Node::Term`].
  pub fn term(kind: impl Into<String>, value: impl Into<String>) -> Node {
    Node::Term { kind: kind.into(), value: value.into() }
  }

  /// Convenience constructor for [`Node::Unary`].
  pub fn unary(op: impl Into<String>, arg: Node) -> Node {
    Node::Unary { op: op.into(), arg: Box::new(arg) }
  }

  /// Convenience constructor for [`Node::Binary`].
  pub fn binary(op: impl Into<String>, lhs: Node, rhs: Node) -> Node {
    Node::Binary { op: op.into(), lhs: Box::new(lhs), rhs: Box::new(rhs) }
  }

  /// The operator tag of this node, or `None` for a term.
  pub fn op(&self) -> Option<&str> {
    match self {
      Node::Term { .. } => None,
      Node::Unary { op, .. } | Node::Binary { op, .. } => Some(op),
    }
  }

  pub fn is_term(&self) -> bool {
    matches!(self, Node::Term { .. })
  }
}

/// Renders the tree as an S-expression, such as `(add a (mul b c))`.
impl Display for Node {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Node::Term { value, .. } => write!(f, "{value}"),
      Node::Unary { op, arg } => write!(f, "({op} {arg})"),
      Node::Binary { op, lhs, rhs } => write!(f, "({op} {lhs} {rhs})"),
    }
  }
}
