/// The resolution of one handler invocation.
///
/// A handler either remains in the active state or names its successor.
/// Deferring the current signal is requested through the handler context
/// and always pairs with [`Next::Stay`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Next<T> {
  /// Remain in the active state.
  Stay,
  /// Leave the active state and activate the given successor.
  Goto(T),
}

impl<T> Next<T> {
  /// Returns a transition to `state`.
  #[inline]
  pub const fn goto(state: T) -> Self {
    Self::Goto(state)
  }

  /// Returns `true` if the handler remains in the active state.
  #[inline]
  pub const fn is_stay(&self) -> bool {
    matches!(self, Self::Stay)
  }

  /// Returns `true` if the handler requested a transition.
  #[inline]
  pub const fn is_goto(&self) -> bool {
    matches!(self, Self::Goto(_))
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::core::Next;

  #[test]
  fn test_stay() {
    let next: Next<u8> = Next::Stay;

    assert!(next.is_stay());
    assert!(!next.is_goto());
  }

  #[test]
  fn test_goto() {
    let next: Next<u8> = Next::goto(7);

    assert!(next.is_goto());
    assert!(!next.is_stay());
    assert_eq!(next, Next::Goto(7));
  }
}
