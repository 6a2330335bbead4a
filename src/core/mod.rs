//! Fundamental types shared by processes, mailboxes, and observers.
//!
//! Every process speaks a closed signal alphabet and moves through a closed
//! set of states, both expressed as plain Rust enums:
//!
//! - [`Signal`]: Trait implemented by a process's signal enum
//! - [`StateId`]: Trait implemented by a machine's state enum
//! - [`Next`]: Handler result (`Stay` or `Goto`)
//! - [`ProcessId`]: Group-unique process identifier

mod next;
mod pid;
mod signal;
mod state_id;

pub use self::next::Next;
pub use self::pid::ProcessId;
pub use self::signal::Signal;
pub use self::state_id::StateId;
