
//! Operator grammar configuration.
//!
//! Adding an operator to a grammar means adding an entry to an
//! [`OperatorTable`]; the parsing engine never inspects operator
//! symbols directly.

mod associativity;
mod binding_power;
mod fixity;
mod table;

pub use associativity::Associativity;
pub use binding_power::BindingPower;
pub use fixity::{Fixity, FixityTypes, EmptyFixity, Nud, Led,
                 PrefixProperties, GroupProperties, InfixProperties, PostfixProperties};
pub use table::OperatorTable;

/// An operator symbol together with its roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
  symbol: String,
  fixity: Fixity,
}

impl Operator {
  /// Constructs a new operator with the given properties.
  pub fn new(symbol: impl Into<String>, fixity: Fixity) -> Self {
    Operator {
      symbol: symbol.into(),
      fixity,
    }
  }

  /// The symbol of the operator, as it appears in the source text.
  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn fixity(&self) -> &Fixity {
    &self.fixity
  }

  pub fn into_fixity(self) -> Fixity {
    self.fixity
  }

  /// The semantic tags this operator can produce in a tree. Grouping
  /// operators produce no tag.
  pub fn tags(&self) -> impl Iterator<Item = &str> {
    let prefix_tag = match self.fixity.nud() {
      Some(Nud::Prefix(props)) => Some(props.tag()),
      _ => None,
    };
    let led_tag = self.fixity.led().map(|led| led.tag());
    prefix_tag.into_iter().chain(led_tag)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tags() {
    let op = Operator::new("-", Fixity::new()
      .with_prefix("neg", BindingPower::new(5))
      .with_infix("sub", Associativity::Left, BindingPower::new(0)));
    assert_eq!(op.tags().collect::<Vec<_>>(), vec!["neg", "sub"]);

    let op = Operator::new("(", Fixity::new().with_group(")", BindingPower::MIN));
    assert_eq!(op.tags().count(), 0);
  }

  #[test]
  fn test_symbol() {
    let op = Operator::new("!", Fixity::new().with_postfix("fact", BindingPower::new(6)));
    assert_eq!(op.symbol(), "!");
    assert_eq!(op.fixity().fixity_types(), FixityTypes::POSTFIX);
  }
}
