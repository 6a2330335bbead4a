//! Passive mailbox drains.
//!
//! A [`ConsumerSink`] stands in for the outside world at the edge of a
//! process graph: it receives every signal sent to its mailbox, logs it,
//! and records it in arrival order until the group is closed.
//!
//! A sink spawned with [`Retention::All`] keeps every signal it receives for
//! as long as it runs. Long-running sinks should use [`Retention::Latest`].

use parking_lot::Mutex;
use parking_lot::MutexGuard;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::mem;
use tokio::task::JoinHandle;
use tracing::Level;
use tracing::Span;
use tracing::debug;
use tracing::info;
use tracing::span;
use triomphe::Arc;

use crate::core::Signal;
use crate::mailbox::MailRecv;
use crate::mailbox::Received;

// -----------------------------------------------------------------------------
// Retention
// -----------------------------------------------------------------------------

/// How many received signals a sink keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Retention {
  /// Keep every signal.
  #[default]
  All,
  /// Keep at most the `n` most recent signals. `Latest(0)` only logs.
  Latest(usize),
}

// -----------------------------------------------------------------------------
// Seen
// -----------------------------------------------------------------------------

struct Seen<S> {
  count: usize,
  kept: VecDeque<S>,
  retention: Retention,
}

impl<S> Seen<S> {
  fn new(retention: Retention) -> Self {
    Self {
      count: 0,
      kept: VecDeque::new(),
      retention,
    }
  }

  fn push(&mut self, signal: S) {
    self.count += 1;

    match self.retention {
      Retention::All => self.kept.push_back(signal),
      Retention::Latest(0) => {}
      Retention::Latest(limit) => {
        if self.kept.len() == limit {
          self.kept.pop_front();
        }

        self.kept.push_back(signal);
      }
    }
  }
}

// -----------------------------------------------------------------------------
// Consumer Sink
// -----------------------------------------------------------------------------

/// Spawns mailbox drains.
#[derive(Clone, Copy, Debug)]
pub struct ConsumerSink;

impl ConsumerSink {
  /// Drains `mailbox` on a new task until the group is closed, keeping every
  /// received signal.
  ///
  /// # Panics
  ///
  /// Panics if called outside of a tokio runtime.
  #[inline]
  pub fn spawn<S>(name: &str, mailbox: MailRecv<S>) -> SinkHandle<S>
  where
    S: Signal,
  {
    Self::spawn_opt(name, mailbox, Retention::All)
  }

  /// Drains `mailbox` on a new task until the group is closed, keeping
  /// received signals according to `retention`.
  ///
  /// # Panics
  ///
  /// Panics if called outside of a tokio runtime.
  pub fn spawn_opt<S>(name: &str, mut mailbox: MailRecv<S>, retention: Retention) -> SinkHandle<S>
  where
    S: Signal,
  {
    let name: Box<str> = name.into();
    let seen: Arc<Mutex<Seen<S>>> = Arc::new(Mutex::new(Seen::new(retention)));
    let span: Span = span!(target: "sdl", Level::DEBUG, "sink", name = &*name);

    let task: JoinHandle<()> = tokio::spawn({
      let name: Box<str> = name.clone();
      let seen: Arc<Mutex<Seen<S>>> = Arc::clone(&seen);

      async move {
        debug!(target: "sdl", parent: &span, ?retention, "polling");

        while let Received::Signal(signal) = mailbox.recv().await {
          info!(
            target: "sdl",
            parent: &span,
            tag = signal.tag(),
            value = ?signal,
            "{name} <- {}",
            signal.tag(),
          );

          seen.lock().push(signal);
        }

        debug!(target: "sdl", parent: &span, "canceled");
      }
    });

    SinkHandle { name, seen, task }
  }
}

// -----------------------------------------------------------------------------
// Sink Handle
// -----------------------------------------------------------------------------

/// A handle to a running [`ConsumerSink`].
pub struct SinkHandle<S> {
  name: Box<str>,
  seen: Arc<Mutex<Seen<S>>>,
  task: JoinHandle<()>,
}

impl<S> SinkHandle<S> {
  /// Returns the name of the sink.
  #[inline]
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Returns the number of signals received so far, retained or not.
  #[inline]
  pub fn len(&self) -> usize {
    self.seen.lock().count
  }

  /// Returns `true` if no signal has been received yet.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns a copy of the retained signals, in arrival order.
  pub fn snapshot(&self) -> Vec<S>
  where
    S: Clone,
  {
    self.seen.lock().kept.iter().cloned().collect()
  }

  /// Returns `true` if the sink has observed cancellation and exited.
  #[inline]
  pub fn is_finished(&self) -> bool {
    self.task.is_finished()
  }

  /// Waits for the group to be closed and returns the retained signals, in
  /// arrival order.
  pub async fn join(self) -> Vec<S> {
    if let Err(error) = self.task.await {
      if error.is_panic() {
        std::panic::resume_unwind(error.into_panic());
      }
    }

    mem::take(&mut self.seen.lock().kept).into()
  }
}

impl<S> Debug for SinkHandle<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let seen: MutexGuard<'_, Seen<S>> = self.seen.lock();

    f.debug_struct("SinkHandle")
      .field("name", &self.name)
      .field("len", &seen.count)
      .field("retention", &seen.retention)
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
