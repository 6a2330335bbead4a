use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::sync::Arc;

use crate::consts;
use crate::observer::Observer;
use crate::observer::TracingObserver;

/// Construction-time configuration of a process [`Group`].
///
/// [`Group`]: crate::group::Group
#[derive(Clone)]
pub struct GroupConfig {
  /// Number of signals each mailbox of the group buffers.
  pub mailbox_capacity: usize,
  /// Lifecycle event sink shared by every process of the group.
  pub observer: Arc<dyn Observer>,
}

impl GroupConfig {
  /// Creates a configuration with the default capacity and a
  /// [`TracingObserver`].
  #[inline]
  pub fn new() -> Self {
    Self {
      mailbox_capacity: consts::DEFAULT_MAILBOX_CAPACITY,
      observer: Arc::new(TracingObserver::new()),
    }
  }

  /// Sets the mailbox capacity.
  #[inline]
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.mailbox_capacity = capacity;
    self
  }

  /// Sets the lifecycle observer.
  #[inline]
  pub fn with_observer<O>(mut self, observer: Arc<O>) -> Self
  where
    O: Observer,
  {
    let observer: Arc<dyn Observer> = observer;

    self.observer = observer;
    self
  }
}

impl Default for GroupConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl Debug for GroupConfig {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("GroupConfig")
      .field("mailbox_capacity", &self.mailbox_capacity)
      .finish_non_exhaustive()
  }
}
