//! Communicating state machines with bounded mailboxes, signal saving, and
//! shared cancellation.
//!
//! Each process owns a private bounded mailbox and a [`Machine`] describing
//! its behavior as a closed set of states. The engine activates one state at
//! a time, handles one signal at a time, and supports the SDL `save`
//! construct: a signal deferred in one state is replayed, in order, at the
//! start of the next state activation.
//!
//! Processes belong to a [`Group`] which fixes their mailbox capacity and
//! lifecycle observer and owns the cancellation token shared by all of
//! them.
//!
//! # Quick Start
//!
//! ```
//! use sdl_spec::core::{Next, Signal, StateId};
//! use sdl_spec::engine::{Context, Machine};
//! use sdl_spec::group::Group;
//! use sdl_spec::mailbox::MailSend;
//!
//! #[derive(Debug)]
//! enum Light {
//!   Toggle,
//! }
//!
//! impl Signal for Light {
//!   fn tag(&self) -> &'static str {
//!     "Toggle"
//!   }
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Bulb {
//!   Off,
//!   On,
//! }
//!
//! impl StateId for Bulb {
//!   fn name(&self) -> &'static str {
//!     match self {
//!       Self::Off => "off",
//!       Self::On => "on",
//!     }
//!   }
//! }
//!
//! struct Switch;
//!
//! impl Machine for Switch {
//!   type Signal = Light;
//!   type State = Bulb;
//!
//!   async fn handle(&mut self, state: Bulb, _: &Light, _: &mut Context<'_>) -> Next<Bulb> {
//!     match state {
//!       Bulb::Off => Next::Goto(Bulb::On),
//!       Bulb::On => Next::Goto(Bulb::Off),
//!     }
//!   }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let group: Group = Group::default();
//! let light: MailSend<Light> = group.spawn("light", |process| process.start(Switch, Bulb::Off));
//!
//! light.send(Light::Toggle).await;
//! group.close();
//! # }
//! ```
//!
//! # Core Modules
//!
//! - [`core`]: Signal and state vocabulary, process identifiers
//! - [`engine`]: The [`Machine`] trait and the activation engine
//! - [`group`]: Process groups, creation, and cancellation
//! - [`mailbox`]: Bounded, cancellation-aware FIFO queues
//! - [`observer`]: Pluggable lifecycle observers
//! - [`transmit`]: Scripted signal injection
//! - [`sink`]: Passive mailbox drains
//! - [`init`]: Runtime bootstrap
//! - [`error`]: Exception system
//! - [`consts`]: Runtime configuration constants
//!
//! [`Machine`]: crate::engine::Machine
//! [`Group`]: crate::group::Group

mod proc;
mod utils;

pub mod cancel;
pub mod consts;
pub mod core;
pub mod engine;
pub mod error;
pub mod group;
pub mod init;
pub mod mailbox;
pub mod observer;
pub mod sink;
pub mod transmit;
