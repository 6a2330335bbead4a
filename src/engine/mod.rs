//! The state activation engine.
//!
//! A process is driven by a [`Machine`]: a value owning the process-local
//! data, plus a closed set of states enumerated by [`Machine::State`]. The
//! engine activates one state at a time and feeds it signals, one at a
//! time, through [`Machine::handle`].
//!
//! # Activation Protocol
//!
//! On entering a state the engine:
//!
//! 1. Records the state name as the process's diagnostic label
//! 2. Takes the signals saved during the previous activation
//! 3. Replays them, in save order, before touching the mailbox
//! 4. Receives from the mailbox until cancellation or a transition
//!
//! Each handler invocation resolves to exactly one outcome:
//!
//! - **consume**: return [`Next::Stay`]
//! - **defer**: call [`Context::save`] and return [`Next::Stay`]
//! - **ignore**: call [`Context::ignore`] and return [`Next::Stay`]
//! - **transition**: return [`Next::Goto`]
//!
//! Saving a signal and requesting a transition in the same invocation is a
//! contract violation and raises a `BadState` exception.
//!
//! A signal saved while it is being replayed is not seen again until the
//! activation after the next one; replay never loops within an activation.
//!
//! # Example
//!
//! ```
//! use sdl_spec::core::{Next, Signal, StateId};
//! use sdl_spec::engine::{Context, Machine};
//!
//! #[derive(Debug)]
//! enum Door {
//!   Open,
//!   Close,
//! }
//!
//! impl Signal for Door {
//!   fn tag(&self) -> &'static str {
//!     match self {
//!       Self::Open => "Open",
//!       Self::Close => "Close",
//!     }
//!   }
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum State {
//!   Closed,
//!   Opened,
//! }
//!
//! impl StateId for State {
//!   fn name(&self) -> &'static str {
//!     match self {
//!       Self::Closed => "closed",
//!       Self::Opened => "opened",
//!     }
//!   }
//! }
//!
//! struct Hinge;
//!
//! impl Machine for Hinge {
//!   type Signal = Door;
//!   type State = State;
//!
//!   async fn handle(&mut self, state: State, signal: &Door, cx: &mut Context<'_>) -> Next<State> {
//!     match (state, signal) {
//!       (State::Closed, Door::Open) => Next::Goto(State::Opened),
//!       (State::Opened, Door::Close) => Next::Goto(State::Closed),
//!       _ => {
//!         cx.ignore();
//!         Next::Stay
//!       }
//!     }
//!   }
//! }
//! ```

mod activation;
mod context;

pub(crate) use self::activation::run;
pub use self::context::Context;
pub(crate) use self::context::Disposition;

use crate::core::Next;
use crate::core::Signal;
use crate::core::StateId;

/// A state machine driving one process.
///
/// The engine guarantees that `handle` is never invoked concurrently for
/// the same process, so the machine may freely mutate its own data.
pub trait Machine: Send + 'static {
  /// The closed signal alphabet of the process.
  type Signal: Signal;

  /// The closed set of states of the machine.
  type State: StateId;

  /// Handles one signal in the active `state`.
  ///
  /// The engine keeps ownership of `signal`; call [`Context::save`] to defer
  /// it to the next activation or [`Context::ignore`] to mark it unmatched.
  ///
  /// A handler that never returns also never observes cancellation.
  fn handle(
    &mut self,
    state: Self::State,
    signal: &Self::Signal,
    cx: &mut Context<'_>,
  ) -> impl Future<Output = Next<Self::State>> + Send;
}
