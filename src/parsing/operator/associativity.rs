
use super::binding_power::BindingPower;

/// The associativity of an infix operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
  /// `a # b # c` groups as `(a # b) # c`.
  Left,
  /// `a # b # c` groups as `a # (b # c)`.
  Right,
}

impl Associativity {
  pub const fn is_left_assoc(self) -> bool {
    matches!(self, Associativity::Left)
  }

  pub const fn is_right_assoc(self) -> bool {
    matches!(self, Associativity::Right)
  }

  /// The binding power at which the right-hand operand of an operator
  /// with this associativity is parsed.
  ///
  /// A left-associative operator parses its right-hand side one step
  /// tighter than itself, so another occurrence of the same operator
  /// ends the operand and is picked up by the enclosing loop. A
  /// right-associative operator parses its right-hand side at its own
  /// binding power, so the operand absorbs the next occurrence.
  pub const fn right_binding_power(self, bp: BindingPower) -> BindingPower {
    match self {
      Associativity::Left => bp.incremented(),
      Associativity::Right => bp,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_left_assoc_binding_power() {
    let bp = BindingPower::new(2);
    assert_eq!(Associativity::Left.right_binding_power(bp), BindingPower::new(3));
  }

  #[test]
  fn test_right_assoc_binding_power() {
    let bp = BindingPower::new(4);
    assert_eq!(Associativity::Right.right_binding_power(bp), BindingPower::new(4));
  }

  #[test]
  fn test_predicates() {
    assert!(Associativity::Left.is_left_assoc());
    assert!(!Associativity::Left.is_right_assoc());
    assert!(Associativity::Right.is_right_assoc());
  }
}
