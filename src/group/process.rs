use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tokio::task::JoinError;
use tokio::task::JoinHandle;
use triomphe::Arc;

use crate::cancel::CancelToken;
use crate::core::ProcessId;
use crate::core::Signal;
use crate::engine;
use crate::engine::Machine;
use crate::mailbox::MailRecv;
use crate::mailbox::MailSend;
use crate::proc::ProcData;
use crate::proc::ProcTable;
use crate::proc::ProcTask;
use crate::utils::CatchUnwind;
use crate::utils::Panic;

// -----------------------------------------------------------------------------
// Process
// -----------------------------------------------------------------------------

/// A created process waiting for its initial state.
///
/// Handed to the constructor passed to [`Group::spawn`]. The constructor
/// must call [`Process::start`], which consumes the handle, so exactly one
/// initial state is ever installed.
///
/// [`Group::spawn`]: crate::group::Group::spawn
pub struct Process<S> {
  pub(crate) data: Arc<ProcData>,
  pub(crate) table: Arc<ProcTable>,
  pub(crate) send: MailSend<S>,
  pub(crate) recv: MailRecv<S>,
  pub(crate) token: CancelToken,
}

impl<S> Process<S>
where
  S: Signal,
{
  /// Returns the identifier of the process.
  #[inline]
  pub fn pid(&self) -> ProcessId {
    self.data.pid()
  }

  /// Returns the name of the process.
  #[inline]
  pub fn name(&self) -> &str {
    self.data.name()
  }

  /// Returns the sending side of the process's own mailbox.
  #[inline]
  pub fn sender(&self) -> &MailSend<S> {
    &self.send
  }

  /// Returns the cancellation token of the process's group.
  #[inline]
  pub fn token(&self) -> &CancelToken {
    &self.token
  }

  /// Installs `initial` as the first active state of `machine` and starts
  /// the process worker.
  ///
  /// # Panics
  ///
  /// Panics if called outside of a tokio runtime.
  pub fn start<M>(self, machine: M, initial: M::State) -> Started
  where
    M: Machine<Signal = S>,
  {
    let task: ProcTask = ProcTask::new(self.data, self.table);
    let recv: MailRecv<S> = self.recv;

    let worker = async move {
      let result: Result<(), Panic> = CatchUnwind::new(engine::run(&task, machine, initial, recv)).await;

      if let Err(panic) = result {
        tracing::error!(
          target: "sdl",
          parent: task.span(),
          state = task.state(),
          error = panic.message(),
          "process crashed",
        );

        panic.resume();
      }

      tracing::debug!(target: "sdl", parent: task.span(), "exiting");
    };

    Started {
      task: tokio::spawn(worker),
    }
  }
}

impl<S> Debug for Process<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("Process")
      .field("pid", &self.data.pid())
      .field("name", &self.data.name())
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Started
// -----------------------------------------------------------------------------

/// Proof that a process constructor started its process.
///
/// Only obtainable from [`Process::start`].
#[derive(Debug)]
pub struct Started {
  task: JoinHandle<()>,
}

// -----------------------------------------------------------------------------
// Process Handle
// -----------------------------------------------------------------------------

/// An owning handle to a running process.
pub struct ProcessHandle<S> {
  data: Arc<ProcData>,
  send: MailSend<S>,
  task: JoinHandle<()>,
}

impl<S> ProcessHandle<S>
where
  S: Signal,
{
  #[inline]
  pub(crate) fn new(data: Arc<ProcData>, send: MailSend<S>, started: Started) -> Self {
    Self {
      data,
      send,
      task: started.task,
    }
  }

  /// Returns the identifier of the process.
  #[inline]
  pub fn pid(&self) -> ProcessId {
    self.data.pid()
  }

  /// Returns the name of the process.
  #[inline]
  pub fn name(&self) -> &str {
    self.data.name()
  }

  /// Returns the current diagnostic state label.
  ///
  /// This is the name of the active state, `"Created"` before the first
  /// activation, or `"Canceled"` once the worker observed cancellation.
  #[inline]
  pub fn state(&self) -> &'static str {
    self.data.state()
  }

  /// Returns the sending side of the process's mailbox.
  #[inline]
  pub fn sender(&self) -> &MailSend<S> {
    &self.send
  }

  /// Converts this handle into the sending side of the process's mailbox.
  ///
  /// The process keeps running.
  #[inline]
  pub fn into_sender(self) -> MailSend<S> {
    self.send
  }

  /// Returns `true` if the process worker has exited.
  #[inline]
  pub fn is_finished(&self) -> bool {
    self.task.is_finished()
  }

  /// Waits for the process worker to exit.
  ///
  /// Returns an error if a handler panicked.
  pub async fn join(self) -> Result<(), JoinError> {
    self.task.await
  }
}

impl<S> Debug for ProcessHandle<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("ProcessHandle")
      .field("pid", &self.data.pid())
      .field("name", &self.data.name())
      .field("state", &self.data.state())
      .finish_non_exhaustive()
  }
}
