//! Internal per-process data structures.
//!
//! These types are internal to the runtime and not exposed to user code,
//! apart from the [`ProcessInfo`] snapshot returned by the group registry.
//!
//! # Architecture
//!
//! Process data is split into two sections with different locking
//! requirements:
//!
//! - `ProcReadOnly`: Immutable data accessible without locks
//! - `ProcExternal`: The diagnostic state label, protected by [`RwLock`]
//!
//! The deferred-signal queue is owned by the process worker and never
//! shared, so it needs no lock at all.
//!
//! # Lifetime Management
//!
//! [`ProcTask`] wraps process data and removes the process from its group's
//! [`ProcTable`] on drop, whether the worker exits cleanly or unwinds.
//!
//! [`RwLock`]: ::parking_lot::RwLock

mod deferred;
mod proc_data;
mod proc_table;
mod proc_task;

pub(crate) use self::deferred::Deferred;
pub(crate) use self::proc_data::ProcData;
pub use self::proc_table::ProcessInfo;
pub(crate) use self::proc_table::ProcTable;
pub(crate) use self::proc_task::ProcTask;
