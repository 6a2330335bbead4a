use bitflags::bitflags;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::core::ProcessId;
use crate::core::Signal;

// -----------------------------------------------------------------------------
// Event Kind
// -----------------------------------------------------------------------------

/// The lifecycle point an [`Event`] describes.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum EventKind {
  /// A state activation began.
  EnteredState,
  /// A signal was consumed by the active handler.
  Consumed,
  /// A signal matched no handler branch.
  Ignored,
  /// A signal was deferred to the next activation.
  Saved,
}

impl EventKind {
  /// Returns the mask bit selecting this kind.
  #[inline]
  pub const fn mask(&self) -> EventMask {
    match self {
      Self::EnteredState => EventMask::ENTERED_STATE,
      Self::Consumed => EventMask::CONSUMED,
      Self::Ignored => EventMask::IGNORED,
      Self::Saved => EventMask::SAVED,
    }
  }

  #[inline]
  pub(crate) const fn label(&self) -> &'static str {
    match self {
      Self::EnteredState => "entered-state",
      Self::Consumed => "consumed",
      Self::Ignored => "ignored",
      Self::Saved => "saved",
    }
  }
}

impl Display for EventKind {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.write_str(self.label())
  }
}

// -----------------------------------------------------------------------------
// Event Mask
// -----------------------------------------------------------------------------

bitflags! {
  /// A set of [`EventKind`]s an observer is interested in.
  #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
  pub struct EventMask: u8 {
    const ENTERED_STATE = 1 << 0;
    const CONSUMED = 1 << 1;
    const IGNORED = 1 << 2;
    const SAVED = 1 << 3;
  }
}

impl EventMask {
  /// Returns `true` if events of `kind` are selected.
  #[inline]
  pub const fn selects(&self, kind: EventKind) -> bool {
    self.contains(kind.mask())
  }
}

impl Default for EventMask {
  #[inline]
  fn default() -> Self {
    Self::all()
  }
}

// -----------------------------------------------------------------------------
// Event
// -----------------------------------------------------------------------------

/// A single process lifecycle event.
///
/// [`EventKind::EnteredState`] events carry no signal.
#[derive(Clone, Copy, Debug)]
pub struct Event<'a> {
  pid: ProcessId,
  process: &'a str,
  state: &'static str,
  kind: EventKind,
  signal: Option<&'a dyn Signal>,
}

impl<'a> Event<'a> {
  #[inline]
  pub(crate) const fn new(
    pid: ProcessId,
    process: &'a str,
    state: &'static str,
    kind: EventKind,
    signal: Option<&'a dyn Signal>,
  ) -> Self {
    Self {
      pid,
      process,
      state,
      kind,
      signal,
    }
  }

  /// Returns the identifier of the reporting process.
  #[inline]
  pub const fn pid(&self) -> ProcessId {
    self.pid
  }

  /// Returns the name of the reporting process.
  #[inline]
  pub const fn process(&self) -> &'a str {
    self.process
  }

  /// Returns the name of the active state.
  #[inline]
  pub const fn state(&self) -> &'static str {
    self.state
  }

  /// Returns the lifecycle point.
  #[inline]
  pub const fn kind(&self) -> EventKind {
    self.kind
  }

  /// Returns the signal involved, if any.
  #[inline]
  pub const fn signal(&self) -> Option<&'a dyn Signal> {
    self.signal
  }

  /// Returns the tag of the signal involved, if any.
  #[inline]
  pub fn tag(&self) -> Option<&'static str> {
    self.signal.map(|signal| signal.tag())
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
