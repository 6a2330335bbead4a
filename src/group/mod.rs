//! Process groups.
//!
//! A [`Group`] is the unit of configuration and cancellation: every process
//! and sink created through it shares one mailbox capacity, one observer,
//! and one [`CancelToken`]. Closing the group terminates all of them.
//!
//! # Creating Processes
//!
//! [`Group::spawn`] takes a process name and a constructor. The constructor
//! receives the new [`Process`], builds its [`Machine`], and starts it in its
//! initial state; the returned [`MailSend`] is how other participants talk to
//! the process.
//!
//! ```
//! use sdl_spec::core::{Next, Signal, StateId};
//! use sdl_spec::engine::{Context, Machine};
//! use sdl_spec::group::{Group, GroupConfig};
//! use sdl_spec::mailbox::MailSend;
//!
//! #[derive(Debug)]
//! struct Tick;
//!
//! impl Signal for Tick {
//!   fn tag(&self) -> &'static str {
//!     "Tick"
//!   }
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! struct Running;
//!
//! impl StateId for Running {
//!   fn name(&self) -> &'static str {
//!     "running"
//!   }
//! }
//!
//! struct Clock {
//!   ticks: u64,
//! }
//!
//! impl Machine for Clock {
//!   type Signal = Tick;
//!   type State = Running;
//!
//!   async fn handle(&mut self, _: Running, _: &Tick, _: &mut Context<'_>) -> Next<Running> {
//!     self.ticks += 1;
//!     Next::Stay
//!   }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let group: Group = Group::new(GroupConfig::new().with_capacity(8));
//! let clock: MailSend<Tick> = group.spawn("clock", |process| {
//!   process.start(Clock { ticks: 0 }, Running)
//! });
//!
//! clock.send(Tick).await;
//! group.close();
//! # }
//! ```
//!
//! [`CancelToken`]: crate::cancel::CancelToken
//! [`Machine`]: crate::engine::Machine
//! [`MailSend`]: crate::mailbox::MailSend

mod config;
mod process;

pub use self::config::GroupConfig;
pub use self::process::Process;
pub use self::process::ProcessHandle;
pub use self::process::Started;
pub use crate::proc::ProcessInfo;

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use triomphe::Arc;

use crate::cancel::CancelToken;
use crate::core::ProcessId;
use crate::core::Signal;
use crate::mailbox;
use crate::mailbox::MailRecv;
use crate::mailbox::MailSend;
use crate::observer::Observer;
use crate::proc::ProcData;
use crate::proc::ProcTable;
use crate::raise;
use crate::sink::ConsumerSink;
use crate::sink::Retention;
use crate::sink::SinkHandle;

// -----------------------------------------------------------------------------
// Group
// -----------------------------------------------------------------------------

/// A set of processes sharing configuration and a cancellation token.
///
/// Cheap to clone; every clone refers to the same group.
#[derive(Clone)]
pub struct Group {
  inner: Arc<GroupData>,
}

struct GroupData {
  token: CancelToken,
  capacity: usize,
  observer: std::sync::Arc<dyn Observer>,
  table: Arc<ProcTable>,
}

impl Group {
  /// Creates a new, open group.
  ///
  /// # Panics
  ///
  /// Raises a `BadArg` exception if the configured mailbox capacity is zero.
  pub fn new(config: GroupConfig) -> Self {
    if config.mailbox_capacity == 0 {
      raise!(Error, BadArg, "mailbox capacity must be non-zero");
    }

    Self {
      inner: Arc::new(GroupData {
        token: CancelToken::new(),
        capacity: config.mailbox_capacity,
        observer: config.observer,
        table: Arc::new(ProcTable::new()),
      }),
    }
  }

  /// Returns the cancellation token shared by the group.
  #[inline]
  pub fn token(&self) -> &CancelToken {
    &self.inner.token
  }

  /// Returns the capacity of every mailbox created by the group.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.inner.capacity
  }

  /// Closes the group, terminating every process and sink in it.
  ///
  /// Closing an already-closed group is a no-op.
  pub fn close(&self) {
    if self.is_closed() {
      return;
    }

    tracing::info!(
      target: "sdl",
      live = self.inner.table.len(),
      "group closing",
    );

    self.inner.token.close();
  }

  /// Returns `true` if the group has been closed.
  #[inline]
  pub fn is_closed(&self) -> bool {
    self.inner.token.is_closed()
  }

  /// Creates a standalone mailbox tied to the group's token.
  pub fn buffer<S>(&self) -> (MailSend<S>, MailRecv<S>)
  where
    S: Signal,
  {
    mailbox::channel(self.inner.capacity, self.inner.token.clone())
  }

  /// Creates a process and returns the sending side of its mailbox.
  ///
  /// `constructor` receives the new process and must start it; see
  /// [`Process::start`].
  pub fn spawn<S, C>(&self, name: &str, constructor: C) -> MailSend<S>
  where
    S: Signal,
    C: FnOnce(Process<S>) -> Started,
  {
    self.spawn_opt(name, constructor).into_sender()
  }

  /// Creates a process and returns an owning handle to it.
  pub fn spawn_opt<S, C>(&self, name: &str, constructor: C) -> ProcessHandle<S>
  where
    S: Signal,
    C: FnOnce(Process<S>) -> Started,
  {
    let (send, recv): (MailSend<S>, MailRecv<S>) = self.buffer();
    let pid: ProcessId = ProcessId::next();
    let data: Arc<ProcData> = Arc::new(ProcData::new(pid, name, self.inner.observer.clone()));

    tracing::debug!(target: "sdl", parent: data.span(), "spawning");

    let process: Process<S> = Process {
      data: Arc::clone(&data),
      table: Arc::clone(&self.inner.table),
      send: send.clone(),
      recv,
      token: self.inner.token.clone(),
    };

    ProcessHandle::new(data, send, constructor(process))
  }

  /// Creates a mailbox drained by a [`ConsumerSink`].
  ///
  /// The sink keeps every signal it receives until the group is closed; use
  /// [`sink_opt`] with [`Retention::Latest`] to bound its memory.
  ///
  /// [`sink_opt`]: Self::sink_opt
  #[inline]
  pub fn sink<S>(&self, name: &str) -> (MailSend<S>, SinkHandle<S>)
  where
    S: Signal,
  {
    self.sink_opt(name, Retention::All)
  }

  /// Creates a mailbox drained by a [`ConsumerSink`] with the given
  /// retention.
  pub fn sink_opt<S>(&self, name: &str, retention: Retention) -> (MailSend<S>, SinkHandle<S>)
  where
    S: Signal,
  {
    let (send, recv): (MailSend<S>, MailRecv<S>) = self.buffer();

    (send, ConsumerSink::spawn_opt(name, recv, retention))
  }

  /// Returns a snapshot of the live processes of the group, ordered by pid.
  ///
  /// A process is listed from the moment it is started until its worker
  /// exits.
  pub fn list(&self) -> Vec<ProcessInfo> {
    self.inner.table.list()
  }
}

impl Default for Group {
  #[inline]
  fn default() -> Self {
    Self::new(GroupConfig::new())
  }
}

impl Debug for Group {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("Group")
      .field("capacity", &self.inner.capacity)
      .field("token", &self.inner.token)
      .field("live", &self.inner.table.len())
      .finish()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::panic;
  use std::time::Duration;
  use tokio::time;

  use crate::consts;
  use crate::core::Signal;
  use crate::group::Group;
  use crate::group::GroupConfig;
  use crate::mailbox::MailRecv;
  use crate::mailbox::MailSend;
  use crate::sink::Retention;
  use crate::sink::SinkHandle;

  #[derive(Debug)]
  struct Ping;

  impl Signal for Ping {
    fn tag(&self) -> &'static str {
      "Ping"
    }
  }

  #[test]
  fn test_default_capacity() {
    assert_eq!(Group::default().capacity(), consts::DEFAULT_MAILBOX_CAPACITY);
  }

  #[test]
  fn test_zero_capacity() {
    let result = panic::catch_unwind(|| Group::new(GroupConfig::new().with_capacity(0)));

    assert!(result.is_err());
  }

  #[test]
  fn test_close_is_idempotent() {
    let group: Group = Group::default();
    let clone: Group = group.clone();

    group.close();
    clone.close();

    assert!(group.is_closed());
    assert!(clone.token().is_closed());
  }

  #[test]
  fn test_buffer_capacity() {
    let group: Group = Group::new(GroupConfig::new().with_capacity(3));
    let (send, _recv): (MailSend<Ping>, MailRecv<Ping>) = group.buffer();

    assert_eq!(send.capacity(), 3);
  }

  #[tokio::test(start_paused = true)]
  async fn test_sink_opt_bounds_retention() {
    let group: Group = Group::new(GroupConfig::new().with_capacity(2));
    let (send, sink): (MailSend<Ping>, SinkHandle<Ping>) = group.sink_opt("tail", Retention::Latest(1));

    for _ in 0..6 {
      send.send(Ping).await;
    }

    time::sleep(Duration::from_millis(1)).await;

    assert_eq!(sink.len(), 6);

    group.close();

    assert_eq!(sink.join().await.len(), 1);
  }
}
