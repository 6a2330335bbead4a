use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::error::ExceptionClass;
use crate::error::ExceptionGroup;

/// A contract violation detected by the runtime.
///
/// [`raise!`] renders the exception into the panic message as
/// `{class}:{group} - {message}`, e.g.
/// `error:badstate - signal saved during a transition`. Tests match on that
/// prefix with `#[should_panic(expected = "error:badstate")]`.
///
/// [`raise!`]: crate::raise
pub struct Exception {
  class: ExceptionClass,
  group: ExceptionGroup,
  message: Box<str>,
}

impl Exception {
  /// Builds an exception; usually reached through [`raise!`].
  ///
  /// ```
  /// use sdl_spec::error::{Exception, ExceptionClass, ExceptionGroup};
  ///
  /// let exception = Exception::new(ExceptionClass::Error, ExceptionGroup::BadArg, "capacity 0");
  ///
  /// assert_eq!(exception.to_string(), "error:badarg - capacity 0");
  /// ```
  ///
  /// [`raise!`]: crate::raise
  #[inline]
  pub fn new<T>(class: ExceptionClass, group: ExceptionGroup, message: T) -> Self
  where
    T: Display,
  {
    Self {
      class,
      group,
      message: message.to_string().into_boxed_str(),
    }
  }

  #[inline]
  pub const fn class(&self) -> ExceptionClass {
    self.class
  }

  #[inline]
  pub const fn group(&self) -> ExceptionGroup {
    self.group
  }

  /// Returns the message without the `class:group` prefix.
  #[inline]
  pub fn message(&self) -> &str {
    &self.message
  }
}

impl Debug for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{} - {}", self.class, self.group.label(), self.message)
  }
}

impl Error for Exception {}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
