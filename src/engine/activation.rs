use std::collections::VecDeque;
use tracing::debug;
use tracing::trace;

use crate::consts;
use crate::core::Next;
use crate::core::Signal;
use crate::core::StateId;
use crate::engine::Context;
use crate::engine::Disposition;
use crate::engine::Machine;
use crate::mailbox::MailRecv;
use crate::mailbox::Received;
use crate::observer::EventKind;
use crate::proc::Deferred;
use crate::proc::ProcData;
use crate::raise;

/// Feeds one signal to the handler of `state`.
///
/// Reports exactly one of `Consumed`, `Ignored`, or `Saved` to the observer
/// and moves saved signals into `deferred`.
///
/// # Panics
///
/// Raises a `BadState` exception if the handler saved the signal and
/// requested a transition in the same invocation.
pub(crate) async fn dispatch<M>(
  this: &ProcData,
  machine: &mut M,
  deferred: &mut Deferred<M::Signal>,
  state: M::State,
  signal: M::Signal,
) -> Next<M::State>
where
  M: Machine,
{
  let label: &'static str = state.name();
  let mut cx: Context<'_> = Context::new(this.pid(), this.name(), label);
  let next: Next<M::State> = machine.handle(state, &signal, &mut cx).await;

  match (cx.disposition(), next) {
    (Disposition::Saved, Next::Goto(target)) => {
      raise!(
        Error,
        BadState,
        format!(
          "{} saved `{}` and requested a transition to `{}` in state `{label}`",
          this.name(),
          signal.tag(),
          target.name(),
        ),
      );
    }
    (Disposition::Saved, Next::Stay) => {
      this.emit(label, EventKind::Saved, Some(&signal));
      deferred.save(signal);
    }
    (Disposition::Ignored, _) => {
      this.emit(label, EventKind::Ignored, Some(&signal));

      debug!(
        target: "sdl",
        parent: this.span(),
        state = label,
        tag = signal.tag(),
        "ignored",
      );
    }
    (Disposition::Consumed, _) => {
      this.emit(label, EventKind::Consumed, Some(&signal));
    }
  }

  next
}

/// Runs the activation loop of a process until its group is closed.
pub(crate) async fn run<M>(this: &ProcData, mut machine: M, initial: M::State, mut mailbox: MailRecv<M::Signal>)
where
  M: Machine,
{
  let mut deferred: Deferred<M::Signal> = Deferred::new();
  let mut state: M::State = initial;

  debug!(target: "sdl", parent: this.span(), "initializing");

  'activate: loop {
    let label: &'static str = state.name();

    this.set_state(label);
    this.emit(label, EventKind::EnteredState, None);

    let mut replay: VecDeque<M::Signal> = deferred.take();

    debug!(
      target: "sdl",
      parent: this.span(),
      state = label,
      replay = replay.len(),
      "activating",
    );

    while let Some(signal) = replay.pop_front() {
      if let Next::Goto(next) = dispatch(this, &mut machine, &mut deferred, state, signal).await {
        // The successor replays whatever this state saved, then the rest.
        deferred.append(&mut replay);
        state = next;
        continue 'activate;
      }
    }

    trace!(
      target: "sdl",
      parent: this.span(),
      state = label,
      saved = deferred.len(),
      "polling",
    );

    loop {
      match mailbox.recv().await {
        Received::Signal(signal) => {
          if let Next::Goto(next) = dispatch(this, &mut machine, &mut deferred, state, signal).await {
            state = next;
            continue 'activate;
          }
        }
        Received::Canceled => {
          break 'activate;
        }
      }
    }
  }

  this.set_state(consts::STATE_CANCELED);

  debug!(
    target: "sdl",
    parent: this.span(),
    discarded = deferred.len(),
    "canceled",
  );
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
