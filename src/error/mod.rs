//! Exception types raised by the state machine runtime.
//!
//! The runtime has no error taxonomy for ordinary operation: unmatched
//! signals are logged no-ops, full mailboxes block, and cancellation is a
//! clean shutdown path. Exceptions exist only for programming errors and are
//! propagated as panics:
//!
//! 1. **Class**: The severity level ([`Error`])
//! 2. **Group**: The error category ([`BadArg`], [`BadState`], [`SysInv`])
//! 3. **Description**: A human-readable error message
//!
//! # Raising Exceptions
//!
//! Use the [`raise!`] macro to construct and panic with an exception:
//!
//! ```
//! use sdl_spec::raise;
//!
//! fn validate_capacity(value: usize) {
//!   if value == 0 {
//!     raise!(Error, BadArg, "mailbox capacity must be non-zero");
//!   }
//! }
//! ```
//!
//! A panic raised inside a process worker is logged with the process name
//! and then resumed, so it surfaces through the worker's join handle.
//!
//! [`Error`]: ExceptionClass::Error
//! [`BadArg`]: ExceptionGroup::BadArg
//! [`BadState`]: ExceptionGroup::BadState
//! [`SysInv`]: ExceptionGroup::SysInv
//!
//! [`raise!`]: crate::raise!

mod exception;
mod exception_class;
mod exception_group;

pub use self::exception::Exception;
pub use self::exception_class::ExceptionClass;
pub use self::exception_group::ExceptionGroup;

// -----------------------------------------------------------------------------
// raise!
// -----------------------------------------------------------------------------

/// Raises an exception with the specified class, group, and message.
///
/// This macro constructs an [`Exception`] and immediately panics.
///
/// # Examples
///
/// ```should_panic
/// # use sdl_spec::raise;
/// raise!(Error, BadState, "signal saved during a transition");
/// ```
#[macro_export]
macro_rules! raise {
  ($class:ident, $group:ident, $error:expr $(,)?) => {
    ::std::panic!(
      "{}",
      $crate::error::Exception::new(
        $crate::error::ExceptionClass::$class,
        $crate::error::ExceptionGroup::$group,
        $error,
      ),
    )
  };
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
