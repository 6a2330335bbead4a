use parking_lot::RwLock;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::sync::Arc;
use tracing::Level;
use tracing::Span;
use tracing::span;

use crate::consts;
use crate::core::ProcessId;
use crate::core::Signal;
use crate::observer::Event;
use crate::observer::EventKind;
use crate::observer::Observer;
use crate::proc::ProcessInfo;

// -----------------------------------------------------------------------------
// Proc Data
// -----------------------------------------------------------------------------

/// Top-level process data container with two locking domains.
///
/// 1. **Read-only**: No lock needed, contains immutable data
/// 2. **External**: RwLock-protected, read by the group registry
#[derive(Debug)]
pub(crate) struct ProcData {
  pub(crate) readonly: ProcReadOnly,
  pub(crate) external: RwLock<ProcExternal>,
}

impl ProcData {
  /// Creates the data of a new process reporting to `observer`.
  pub(crate) fn new(pid: ProcessId, name: &str, observer: Arc<dyn Observer>) -> Self {
    Self {
      readonly: ProcReadOnly::new(pid, name, observer),
      external: RwLock::new(ProcExternal::new()),
    }
  }

  #[inline]
  pub(crate) fn pid(&self) -> ProcessId {
    self.readonly.pid
  }

  #[inline]
  pub(crate) fn name(&self) -> &str {
    &self.readonly.name
  }

  #[inline]
  pub(crate) fn span(&self) -> &Span {
    &self.readonly.span
  }

  /// Returns the current diagnostic state label.
  #[inline]
  pub(crate) fn state(&self) -> &'static str {
    self.external.read().state
  }

  /// Replaces the diagnostic state label.
  #[inline]
  pub(crate) fn set_state(&self, state: &'static str) {
    self.external.write().state = state;
  }

  /// Reports a lifecycle event to the configured observer.
  pub(crate) fn emit(&self, state: &'static str, kind: EventKind, signal: Option<&dyn Signal>) {
    let event: Event<'_> = Event::new(self.pid(), self.name(), state, kind, signal);
    self.readonly.observer.observe(&event);
  }

  /// Returns a registry snapshot of this process.
  pub(crate) fn info(&self) -> ProcessInfo {
    ProcessInfo {
      pid: self.pid(),
      name: self.name().to_owned(),
      state: self.state(),
    }
  }
}

// -----------------------------------------------------------------------------
// Proc Read-only
// -----------------------------------------------------------------------------

/// Immutable process data accessible without locking.
pub(crate) struct ProcReadOnly {
  /// PID of the process.
  pub(crate) pid: ProcessId,
  /// Name given at creation; not required to be unique.
  pub(crate) name: Box<str>,
  /// Lifecycle event sink shared with the rest of the group.
  pub(crate) observer: Arc<dyn Observer>,
  /// Parent span of every event logged by the process worker.
  pub(crate) span: Span,
}

impl ProcReadOnly {
  fn new(pid: ProcessId, name: &str, observer: Arc<dyn Observer>) -> Self {
    Self {
      pid,
      name: name.into(),
      observer,
      span: span!(target: "sdl", Level::DEBUG, "process", %pid, name),
    }
  }
}

impl Debug for ProcReadOnly {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("ProcReadOnly")
      .field("pid", &self.pid)
      .field("name", &self.name)
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Proc External
// -----------------------------------------------------------------------------

/// Mutable process data read from outside the worker.
#[derive(Debug)]
pub(crate) struct ProcExternal {
  /// Name of the active state, or a lifecycle label.
  pub(crate) state: &'static str,
}

impl ProcExternal {
  #[inline]
  const fn new() -> Self {
    Self {
      state: consts::STATE_CREATED,
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
