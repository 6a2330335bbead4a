use std::any::Any;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::panic;

/// A panic payload caught at a process boundary.
pub(crate) struct Panic {
  payload: Box<dyn Any + Send>,
}

impl Panic {
  #[inline]
  pub(crate) fn new(payload: Box<dyn Any + Send>) -> Self {
    Self { payload }
  }

  /// Returns the panic message, if the payload carries one.
  pub(crate) fn message(&self) -> &str {
    if let Some(message) = self.payload.downcast_ref::<String>() {
      message.as_str()
    } else if let Some(message) = self.payload.downcast_ref::<&'static str>() {
      message
    } else {
      "Box<dyn Any>"
    }
  }

  /// Continues unwinding with the original payload.
  #[inline]
  pub(crate) fn resume(self) -> ! {
    panic::resume_unwind(self.payload)
  }
}

impl Debug for Panic {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_tuple("Panic").field(&self.message()).finish()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
