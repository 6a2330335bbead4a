use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Exception category indicating the nature of the error.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionGroup {
  /// Invalid function argument or parameter.
  ///
  /// Indicates the caller provided data that violates function preconditions,
  /// such as a mailbox with zero capacity.
  BadArg,
  /// A state handler broke its contract.
  ///
  /// Raised when a handler both saves the current signal and requests a
  /// transition during the same invocation.
  BadState,
  /// Invalid system operation or state.
  ///
  /// Indicates an internal runtime invariant has been broken.
  SysInv,
}

impl ExceptionGroup {
  #[inline]
  pub(crate) const fn label(&self) -> &'static str {
    match self {
      Self::BadArg => "badarg",
      Self::BadState => "badstate",
      Self::SysInv => "sysinv",
    }
  }
}

impl Display for ExceptionGroup {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::BadArg => f.write_str("(BadArg) errors were found with the given argument(s)"),
      Self::BadState => f.write_str("(BadState) a state handler contract has been violated"),
      Self::SysInv => f.write_str("(SysInv) a system invariant has been broken"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
