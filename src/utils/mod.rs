//! Utility types and functions used throughout the runtime.
//!
//! # Contents
//!
//! - [`CatchUnwind`]: Future wrapper for catching panics
//! - [`Panic`]: A caught panic payload
//! - [`measure_fn`]: Execution timing helper

mod futures;
mod measure;
mod panic;

pub(crate) use self::futures::CatchUnwind;
pub(crate) use self::measure::measure_fn;
pub(crate) use self::panic::Panic;
