use crate::observer::Event;
use crate::observer::Observer;

/// An observer that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
  #[inline]
  fn observe(&self, _event: &Event<'_>) {}
}
