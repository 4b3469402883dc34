
/// The binding power of an operator. Higher values bind their
/// operands more tightly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingPower(u32);

impl BindingPower {
  /// The loosest binding power. A parse at this level accepts every
  /// operator.
  pub const MIN: BindingPower = BindingPower(0);
  pub const MAX: BindingPower = BindingPower(u32::MAX);

  pub const fn new(n: u32) -> BindingPower {
    BindingPower(n)
  }

  pub const fn value(self) -> u32 {
    self.0
  }

  /// The next tighter binding power. Saturates at [`BindingPower::MAX`].
  pub const fn incremented(self) -> BindingPower {
    BindingPower(self.0.saturating_add(1))
  }
}

impl From<u32> for BindingPower {
  fn from(n: u32) -> BindingPower {
    BindingPower::new(n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_incremented() {
    assert_eq!(BindingPower::new(4).incremented(), BindingPower::new(5));
    assert_eq!(BindingPower::MAX.incremented(), BindingPower::MAX);
  }

  #[test]
  fn test_ordering() {
    assert!(BindingPower::MIN < BindingPower::new(1));
    assert!(BindingPower::new(2) >= BindingPower::new(2));
  }
}
