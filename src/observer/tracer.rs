use crate::observer::Event;
use crate::observer::EventMask;
use crate::observer::Observer;

/// An observer that reports events through `tracing` at `INFO` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver {
  mask: EventMask,
}

impl TracingObserver {
  /// Creates an observer reporting every event kind.
  #[inline]
  pub fn new() -> Self {
    Self::with_mask(EventMask::all())
  }

  /// Creates an observer reporting only the kinds selected by `mask`.
  #[inline]
  pub const fn with_mask(mask: EventMask) -> Self {
    Self { mask }
  }
}

impl Observer for TracingObserver {
  fn observe(&self, event: &Event<'_>) {
    if !self.mask.selects(event.kind()) {
      return;
    }

    match event.signal() {
      Some(signal) => {
        tracing::info!(
          target: "sdl",
          pid = %event.pid(),
          process = event.process(),
          state = event.state(),
          kind = %event.kind(),
          tag = signal.tag(),
          value = ?signal,
          "{} {}",
          event.kind(),
          signal.tag(),
        );
      }
      None => {
        tracing::info!(
          target: "sdl",
          pid = %event.pid(),
          process = event.process(),
          state = event.state(),
          kind = %event.kind(),
          "{}",
          event.kind(),
        );
      }
    }
  }
}
