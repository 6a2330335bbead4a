use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Identifier uniquely naming a process within the running program.
///
/// Identifiers are allocated from a global monotonic counter and are never
/// reused; two processes with the same name still have distinct identifiers.
///
/// # Format
///
/// Identifiers display as `#PROC<Number>`.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ProcessId {
  bits: u64,
}

impl ProcessId {
  /// Allocates the next unused process identifier.
  #[inline]
  pub(crate) fn next() -> Self {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    Self::from_bits(NEXT.fetch_add(1, Ordering::Relaxed))
  }

  /// Creates a process identifier from its raw bits.
  #[inline]
  pub const fn from_bits(bits: u64) -> Self {
    Self { bits }
  }

  /// Converts this identifier into its raw bits.
  #[inline]
  pub const fn into_bits(self) -> u64 {
    self.bits
  }
}

impl Debug for ProcessId {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for ProcessId {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "#PROC<{}>", self.bits)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
