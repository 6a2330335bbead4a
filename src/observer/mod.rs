//! Pluggable lifecycle observers.
//!
//! The activation engine reports four lifecycle points to the [`Observer`]
//! configured for its group:
//!
//! - [`EventKind::EnteredState`]: a state activation began
//! - [`EventKind::Consumed`]: the active handler consumed a signal
//! - [`EventKind::Ignored`]: the active handler took its default branch
//! - [`EventKind::Saved`]: the active handler deferred a signal
//!
//! Observers are purely diagnostic. They are invoked synchronously from the
//! process worker and must not block; they cannot affect control flow or
//! ordering.
//!
//! # Implementations
//!
//! - [`TracingObserver`]: Emits `tracing` events (the default)
//! - [`NoopObserver`]: Discards everything
//! - [`RecordingObserver`]: Keeps an in-memory history for inspection

mod event;
mod noop;
mod recording;
mod tracer;

pub use self::event::Event;
pub use self::event::EventKind;
pub use self::event::EventMask;
pub use self::noop::NoopObserver;
pub use self::recording::Record;
pub use self::recording::RecordingObserver;
pub use self::tracer::TracingObserver;

/// A sink for process lifecycle events.
pub trait Observer: Send + Sync + 'static {
  /// Receives a single lifecycle event.
  fn observe(&self, event: &Event<'_>);
}
