
//! Fixity declarations for operators.
//!
//! An operator symbol has at most one behavior at the start of an
//! operand (its [`Nud`]) and at most one behavior after a complete
//! operand (its [`Led`]). The behaviors form a small closed set; the
//! parsing engine dispatches on them without knowing any operator
//! symbols.

use super::associativity::Associativity;
use super::binding_power::BindingPower;

use bitflags::bitflags;

/// The roles of one operator symbol. A `Fixity` always has at least
/// one role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixity {
  nud: Option<Nud>,
  led: Option<Led>,
}

/// Behavior of an operator that begins an operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nud {
  Prefix(PrefixProperties),
  Group(GroupProperties),
}

/// Behavior of an operator that follows a complete operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Led {
  Infix(InfixProperties),
  Postfix(PostfixProperties),
}

/// A prefix operator wraps the operand parsed at its own binding
/// power in a unary node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixProperties {
  tag: String,
  prec: BindingPower,
}

/// A grouping operator parses a full sub-expression up to its closing
/// symbol. Groups are transparent in the resulting tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupProperties {
  closing: String,
  inner_prec: BindingPower,
}

/// Unlike prefix and postfix operators, infix operators have both
/// associativity and binding power.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfixProperties {
  tag: String,
  assoc: Associativity,
  prec: BindingPower,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostfixProperties {
  tag: String,
  prec: BindingPower,
}

bitflags! {
  #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
  pub struct FixityTypes: u8 {
    const PREFIX  = 0b0001;
    const GROUP   = 0b0010;
    const INFIX   = 0b0100;
    const POSTFIX = 0b1000;
  }
}

/// The type of an "empty" fixity structure. This is an intermediate
/// type which is only used during building of a [`Fixity`]. It
/// guarantees that a `Fixity` always has at least one role.
#[derive(Debug)]
pub struct EmptyFixity {
  data: Fixity,
}

impl Fixity {
  // allow: EmptyFixity is conceptually a Fixity, just with some
  // typechecks. It's intended to be used in a fluent builder style.
  #[allow(clippy::new_ret_no_self)]
  pub fn new() -> EmptyFixity {
    EmptyFixity {
      data: Fixity { nud: None, led: None },
    }
  }

  /// Sets the prefix behavior, replacing any existing one.
  pub fn with_prefix(mut self, tag: impl Into<String>, prec: BindingPower) -> Fixity {
    self.nud = Some(Nud::Prefix(PrefixProperties { tag: tag.into(), prec }));
    self
  }

  /// Sets the grouping behavior, replacing any existing prefix
  /// behavior.
  pub fn with_group(mut self, closing: impl Into<String>, inner_prec: BindingPower) -> Fixity {
    self.nud = Some(Nud::Group(GroupProperties { closing: closing.into(), inner_prec }));
    self
  }

  /// Sets the infix behavior, replacing any existing infix or postfix
  /// behavior.
  pub fn with_infix(mut self, tag: impl Into<String>, assoc: Associativity, prec: BindingPower) -> Fixity {
    self.led = Some(Led::Infix(InfixProperties { tag: tag.into(), assoc, prec }));
    self
  }

  /// Sets the postfix behavior, replacing any existing infix or
  /// postfix behavior.
  pub fn with_postfix(mut self, tag: impl Into<String>, prec: BindingPower) -> Fixity {
    self.led = Some(Led::Postfix(PostfixProperties { tag: tag.into(), prec }));
    self
  }

  pub fn nud(&self) -> Option<&Nud> {
    self.nud.as_ref()
  }

  pub fn led(&self) -> Option<&Led> {
    self.led.as_ref()
  }

  pub fn fixity_types(&self) -> FixityTypes {
    let mut t = FixityTypes::empty();
    match &self.nud {
      Some(Nud::Prefix(_)) => t |= FixityTypes::PREFIX,
      Some(Nud::Group(_)) => t |= FixityTypes::GROUP,
      None => {}
    }
    match &self.led {
      Some(Led::Infix(_)) => t |= FixityTypes::INFIX,
      Some(Led::Postfix(_)) => t |= FixityTypes::POSTFIX,
      None => {}
    }
    t
  }

  /// Combines two fixities for the same symbol. Roles present in
  /// `other` take priority.
  pub fn merged_with(self, other: Fixity) -> Fixity {
    Fixity {
      nud: other.nud.or(self.nud),
      led: other.led.or(self.led),
    }
  }
}

impl EmptyFixity {
  pub fn with_prefix(self, tag: impl Into<String>, prec: BindingPower) -> Fixity {
    self.data.with_prefix(tag, prec)
  }

  pub fn with_group(self, closing: impl Into<String>, inner_prec: BindingPower) -> Fixity {
    self.data.with_group(closing, inner_prec)
  }

  pub fn with_infix(self, tag: impl Into<String>, assoc: Associativity, prec: BindingPower) -> Fixity {
    self.data.with_infix(tag, assoc, prec)
  }

  pub fn with_postfix(self, tag: impl Into<String>, prec: BindingPower) -> Fixity {
    self.data.with_postfix(tag, prec)
  }
}

impl Led {
  /// The binding power which decides whether this operator continues
  /// the current parse.
  pub fn binding_power(&self) -> BindingPower {
    match self {
      Led::Infix(props) => props.prec,
      Led::Postfix(props) => props.prec,
    }
  }

  pub fn tag(&self) -> &str {
    match self {
      Led::Infix(props) => &props.tag,
      Led::Postfix(props) => &props.tag,
    }
  }
}

impl PrefixProperties {
  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn precedence(&self) -> BindingPower {
    self.prec
  }
}

impl GroupProperties {
  pub fn closing(&self) -> &str {
    &self.closing
  }

  pub fn inner_precedence(&self) -> BindingPower {
    self.inner_prec
  }
}

impl InfixProperties {
  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> BindingPower {
    self.prec
  }

  pub fn right_precedence(&self) -> BindingPower {
    self.assoc.right_binding_power(self.prec)
  }
}

impl PostfixProperties {
  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn precedence(&self) -> BindingPower {
    self.prec
  }
}
