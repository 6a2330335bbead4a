use crate::core::ProcessId;
use crate::core::StateId;

/// How the active handler disposed of the current signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Disposition {
  Consumed,
  Ignored,
  Saved,
}

/// The per-invocation view a handler receives alongside its signal.
///
/// A fresh context is created for every handler invocation; a disposition
/// recorded on it applies to the current signal only. If both [`save`] and
/// [`ignore`] are called, the last call wins.
///
/// [`save`]: Context::save
/// [`ignore`]: Context::ignore
#[derive(Debug)]
pub struct Context<'a> {
  pid: ProcessId,
  process: &'a str,
  state: &'static str,
  disposition: Disposition,
}

impl<'a> Context<'a> {
  #[inline]
  pub(crate) const fn new(pid: ProcessId, process: &'a str, state: &'static str) -> Self {
    Self {
      pid,
      process,
      state,
      disposition: Disposition::Consumed,
    }
  }

  /// Creates a context outside of any running process.
  ///
  /// Useful for exercising a machine's transition table directly.
  ///
  /// # Examples
  ///
  /// ```
  /// use sdl_spec::core::StateId;
  /// use sdl_spec::engine::Context;
  ///
  /// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
  /// struct Idle;
  ///
  /// impl StateId for Idle {
  ///   fn name(&self) -> &'static str {
  ///     "idle"
  ///   }
  /// }
  ///
  /// let mut cx = Context::detached(Idle);
  ///
  /// cx.save();
  ///
  /// assert!(cx.is_saved());
  /// assert_eq!(cx.state(), "idle");
  /// ```
  #[inline]
  pub fn detached<T>(state: T) -> Context<'static>
  where
    T: StateId,
  {
    Context::new(ProcessId::from_bits(0), "detached", state.name())
  }

  /// Returns the identifier of the running process.
  #[inline]
  pub const fn pid(&self) -> ProcessId {
    self.pid
  }

  /// Returns the name of the running process.
  #[inline]
  pub const fn process(&self) -> &'a str {
    self.process
  }

  /// Returns the name of the active state.
  #[inline]
  pub const fn state(&self) -> &'static str {
    self.state
  }

  /// Defers the current signal to the next state activation.
  ///
  /// The handler must then return [`Next::Stay`].
  ///
  /// [`Next::Stay`]: crate::core::Next::Stay
  #[inline]
  pub fn save(&mut self) {
    self.disposition = Disposition::Saved;
  }

  /// Marks the current signal as unmatched by the active state.
  ///
  /// Ignored signals are logged and reported to the observer; they are not
  /// errors.
  #[inline]
  pub fn ignore(&mut self) {
    self.disposition = Disposition::Ignored;
  }

  /// Returns `true` if the current signal has been saved.
  #[inline]
  pub fn is_saved(&self) -> bool {
    self.disposition == Disposition::Saved
  }

  /// Returns `true` if the current signal has been ignored.
  #[inline]
  pub fn is_ignored(&self) -> bool {
    self.disposition == Disposition::Ignored
  }

  #[inline]
  pub(crate) const fn disposition(&self) -> Disposition {
    self.disposition
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
