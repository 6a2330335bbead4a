use parking_lot::Mutex;

use crate::core::ProcessId;
use crate::observer::Event;
use crate::observer::EventKind;
use crate::observer::EventMask;
use crate::observer::Observer;

// -----------------------------------------------------------------------------
// Record
// -----------------------------------------------------------------------------

/// An owned copy of an observed [`Event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
  /// Identifier of the reporting process.
  pub pid: ProcessId,
  /// Name of the reporting process.
  pub process: String,
  /// Name of the active state.
  pub state: &'static str,
  /// The lifecycle point.
  pub kind: EventKind,
  /// Tag of the signal involved, if any.
  pub tag: Option<&'static str>,
  /// `Debug` rendering of the signal involved, if any.
  pub value: Option<String>,
}

impl Record {
  fn capture(event: &Event<'_>) -> Self {
    Self {
      pid: event.pid(),
      process: event.process().to_owned(),
      state: event.state(),
      kind: event.kind(),
      tag: event.tag(),
      value: event.signal().map(|signal| format!("{signal:?}")),
    }
  }
}

// -----------------------------------------------------------------------------
// Recording Observer
// -----------------------------------------------------------------------------

/// An observer that keeps every selected event in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
  mask: EventMask,
  history: Mutex<Vec<Record>>,
}

impl RecordingObserver {
  /// Creates an observer recording every event kind.
  #[inline]
  pub fn new() -> Self {
    Self::with_mask(EventMask::all())
  }

  /// Creates an observer recording only the kinds selected by `mask`.
  #[inline]
  pub fn with_mask(mask: EventMask) -> Self {
    Self {
      mask,
      history: Mutex::new(Vec::new()),
    }
  }

  /// Returns a copy of the recorded history.
  pub fn records(&self) -> Vec<Record> {
    self.history.lock().clone()
  }

  /// Returns the records matching `process`, `state`, and `kind`.
  pub fn matching(&self, process: &str, state: &str, kind: EventKind) -> Vec<Record> {
    self
      .history
      .lock()
      .iter()
      .filter(|record| record.process == process && record.state == state && record.kind == kind)
      .cloned()
      .collect()
  }

  /// Returns the tags handled by `process` in `state` with the given `kind`.
  pub fn tags(&self, process: &str, state: &str, kind: EventKind) -> Vec<&'static str> {
    self
      .matching(process, state, kind)
      .into_iter()
      .filter_map(|record| record.tag)
      .collect()
  }

  /// Returns the sequence of states entered by `process`.
  pub fn entered(&self, process: &str) -> Vec<&'static str> {
    self
      .history
      .lock()
      .iter()
      .filter(|record| record.process == process && record.kind == EventKind::EnteredState)
      .map(|record| record.state)
      .collect()
  }

  /// Returns the number of recorded events.
  pub fn len(&self) -> usize {
    self.history.lock().len()
  }

  /// Returns `true` if nothing has been recorded.
  pub fn is_empty(&self) -> bool {
    self.history.lock().is_empty()
  }

  /// Discards the recorded history.
  pub fn clear(&self) {
    self.history.lock().clear();
  }
}

impl Observer for RecordingObserver {
  fn observe(&self, event: &Event<'_>) {
    if self.mask.selects(event.kind()) {
      self.history.lock().push(Record::capture(event));
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
