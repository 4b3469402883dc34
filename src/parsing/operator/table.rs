
use super::{Operator, Fixity, FixityTypes, Nud, Led};
use super::binding_power::BindingPower;
use super::associativity::Associativity;

use std::collections::{hash_map, HashMap};

/// A table of operators, indexed by their symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  mapping: HashMap<String, Operator>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      mapping: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: &str) -> Option<&Operator> {
    self.mapping.get(symbol)
  }

  pub fn nud(&self, symbol: &str) -> Option<&Nud> {
    self.get(symbol).and_then(|op| op.fixity().nud())
  }

  pub fn led(&self, symbol: &str) -> Option<&Led> {
    self.get(symbol).and_then(|op| op.fixity().led())
  }

  /// The roles registered for `symbol`, or the empty set if the
  /// symbol is not an operator.
  pub fn fixity_types(&self, symbol: &str) -> FixityTypes {
    self.get(symbol).map_or(FixityTypes::empty(), |op| op.fixity().fixity_types())
  }

  /// Inserts an operator. If the symbol is already present, the two
  /// fixities are merged, with the new roles taking priority.
  pub fn insert(&mut self, op: Operator) {
    match self.mapping.entry(op.symbol().to_owned()) {
      hash_map::Entry::Occupied(mut entry) => {
        let existing = entry.get().fixity().clone();
        let symbol = entry.key().clone();
        entry.insert(Operator::new(symbol, existing.merged_with(op.into_fixity())));
      }
      hash_map::Entry::Vacant(entry) => {
        entry.insert(op);
      }
    }
  }

  /// The arithmetic operators: prefix `+` and `-`, grouping with
  /// parentheses, the four binary operators, right-associative `^`,
  /// and postfix `!`.
  pub fn arithmetic() -> OperatorTable {
    vec![
      Operator::new("+", Fixity::new()
        .with_prefix("pos", BindingPower::new(5))
        .with_infix("add", Associativity::Left, BindingPower::new(0))),
      Operator::new("-", Fixity::new()
        .with_prefix("neg", BindingPower::new(5))
        .with_infix("sub", Associativity::Left, BindingPower::new(0))),
      Operator::new("(", Fixity::new().with_group(")", BindingPower::MIN)),
      Operator::new("*", Fixity::new().with_infix("mul", Associativity::Left, BindingPower::new(2))),
      Operator::new("/", Fixity::new().with_infix("div", Associativity::Left, BindingPower::new(2))),
      Operator::new("^", Fixity::new().with_infix("pow", Associativity::Right, BindingPower::new(4))),
      Operator::new("!", Fixity::new().with_postfix("fact", BindingPower::new(6))),
    ].into_iter().collect()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Operator> {
    self.mapping.values()
  }

  pub fn len(&self) -> usize {
    self.mapping.len()
  }

  pub fn is_empty(&self) -> bool {
    self.mapping.is_empty()
  }
}

impl IntoIterator for OperatorTable {
  type Item = Operator;
  type IntoIter = hash_map::IntoValues<String, Operator>;

  fn into_iter(self) -> Self::IntoIter {
    self.mapping.into_values()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}

impl Extend<Operator> for OperatorTable {
  fn extend<I>(&mut self, iter: I)
  where I : IntoIterator<Item = Operator> {
    for op in iter {
      self.insert(op);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_arithmetic_roles() {
    let table = OperatorTable::arithmetic();
    assert_eq!(table.len(), 7);
    assert_eq!(table.fixity_types("+"), FixityTypes::PREFIX | FixityTypes::INFIX);
    assert_eq!(table.fixity_types("-"), FixityTypes::PREFIX | FixityTypes::INFIX);
    assert_eq!(table.fixity_types("("), FixityTypes::GROUP);
    assert_eq!(table.fixity_types(")"), FixityTypes::empty());
    assert_eq!(table.fixity_types("*"), FixityTypes::INFIX);
    assert_eq!(table.fixity_types("^"), FixityTypes::INFIX);
    assert_eq!(table.fixity_types("!"), FixityTypes::POSTFIX);
  }

  #[test]
  fn test_arithmetic_binding_powers() {
    let table = OperatorTable::arithmetic();
    let bp = |symbol: &str| table.led(symbol).unwrap().binding_power();
    assert_eq!(bp("+"), BindingPower::new(0));
    assert_eq!(bp("-"), BindingPower::new(0));
    assert_eq!(bp("*"), BindingPower::new(2));
    assert_eq!(bp("/"), BindingPower::new(2));
    assert_eq!(bp("^"), BindingPower::new(4));
    assert_eq!(bp("!"), BindingPower::new(6));
  }

  #[test]
  fn test_arithmetic_prefix() {
    let table = OperatorTable::arithmetic();
    let Some(Nud::Prefix(props)) = table.nud("-") else { panic!("expected prefix") };
    assert_eq!(props.tag(), "neg");
    assert_eq!(props.precedence(), BindingPower::new(5));
    let Some(Nud::Group(props)) = table.nud("(") else { panic!("expected group") };
    assert_eq!(props.closing(), ")");
    assert!(table.nud("*").is_none());
  }

  #[test]
  fn test_insert_merges_roles() {
    let mut table = OperatorTable::new();
    table.insert(Operator::new("~", Fixity::new().with_prefix("not", BindingPower::new(3))));
    table.insert(Operator::new("~", Fixity::new().with_infix("xor", Associativity::Left, BindingPower::new(1))));
    assert_eq!(table.len(), 1);
    assert_eq!(table.fixity_types("~"), FixityTypes::PREFIX | FixityTypes::INFIX);
  }

  #[test]
  fn test_extend() {
    let mut table = OperatorTable::arithmetic();
    table.extend(vec![
      Operator::new("%", Fixity::new().with_infix("mod", Associativity::Left, BindingPower::new(2))),
    ]);
    assert_eq!(table.led("%").unwrap().tag(), "mod");
  }
}
