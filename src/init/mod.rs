//! Runtime bootstrap.
//!
//! Processes run on tokio. Programs that do not already own a runtime can
//! use [`block_on`] to build one, install the tracing subscriber, and drive
//! a top-level future to completion.
//!
//! # Example
//!
//! ```no_run
//! use sdl_spec::group::Group;
//! use sdl_spec::init;
//! use sdl_spec::init::RuntimeConfig;
//!
//! init::block_on(RuntimeConfig::new(), async {
//!   let group: Group = Group::default();
//!
//!   // spawn processes, drive them, then:
//!   group.close();
//! });
//! ```

mod config;

pub use self::config::RuntimeConfig;

use std::fmt::Display;
use std::sync::Once;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::runtime::Builder;
use tokio::runtime::Runtime as TokioRuntime;
use tracing::Level;
use tracing::Span;
use tracing::debug;
use tracing::info;
use tracing::span;

use crate::error::Exception;
use crate::error::ExceptionClass;
use crate::error::ExceptionGroup;
use crate::raise;
use crate::utils::measure_fn;

/// Runs `future` to completion on a new multi-threaded runtime.
///
/// The global tracing subscriber is installed on the first call only. Once
/// the future completes the runtime is shut down, waiting at most
/// `rt_shutdown_timeout` for outstanding process workers.
///
/// # Panics
///
/// Raises a `SysInv` exception if the runtime cannot be built.
pub fn block_on<F>(config: RuntimeConfig, future: F) -> F::Output
where
  F: Future,
{
  static TRACING: Once = Once::new();

  TRACING.call_once(|| {
    if let Err(error) = init_tracing_subscriber(&config) {
      eprintln!("failed to set tracing subscriber:");
      eprintln!("    {}", error.message());
    }
  });

  let span: Span = span!(target: "sdl", Level::DEBUG, "init::block_on");

  let runtime: TokioRuntime = match build_tokio_runtime(&config) {
    Ok(runtime) => runtime,
    Err(error) => raise!(Error, SysInv, format!("failed to build runtime: {}", error.message())),
  };

  debug!(target: "sdl", parent: &span, "initializing");

  let output: F::Output = runtime.block_on(future);

  info!(
    target: "sdl",
    parent: &span,
    timeout = ?config.rt_shutdown_timeout,
    "system stopping",
  );

  let ((), elapsed): ((), Duration) = measure_fn(|| {
    runtime.shutdown_timeout(config.rt_shutdown_timeout);
  });

  info!(
    target: "sdl",
    parent: &span,
    elapsed = ?elapsed,
    "system stopped",
  );

  output
}

/// Builds the global tracing subscriber configuration.
#[cfg(feature = "tracing")]
fn init_tracing_subscriber(config: &RuntimeConfig) -> Result<(), Exception> {
  use tracing_subscriber::FmtSubscriber;
  use tracing_subscriber::fmt::format;
  use tracing_subscriber::util::SubscriberInitExt;

  FmtSubscriber::builder()
    .event_format(format().compact())
    .log_internal_errors(true)
    .with_ansi(true)
    .with_file(config.tracing_source_file)
    .with_level(true)
    .with_line_number(config.tracing_source_line)
    .with_max_level(config.tracing_filter())
    .with_target(config.tracing_source_name)
    .with_thread_ids(config.tracing_thread_info)
    .with_thread_names(config.tracing_thread_info)
    .finish()
    .try_init()
    .map_err(error)
}

#[cfg(not(feature = "tracing"))]
fn init_tracing_subscriber(_config: &RuntimeConfig) -> Result<(), Exception> {
  Ok(())
}

/// Builds the Tokio multi-threaded runtime with the given configuration.
fn build_tokio_runtime(config: &RuntimeConfig) -> Result<TokioRuntime, Exception> {
  Builder::new_multi_thread()
    .enable_time()
    .event_interval(config.rt_event_interval)
    .global_queue_interval(config.rt_global_queue_interval)
    .max_blocking_threads(config.rt_max_blocking_threads)
    .thread_keep_alive(config.rt_thread_keep_alive)
    .thread_name_fn(next_worker_name)
    .thread_stack_size(config.rt_thread_stack_size)
    .worker_threads(config.rt_worker_threads)
    .build()
    .map_err(error)
}

/// Generates a unique name for the next worker thread.
#[inline]
fn next_worker_name() -> String {
  format!("sdl-worker-{:0>2}", next_worker_id())
}

/// Atomically increments and returns the next worker thread ID.
#[inline]
fn next_worker_id() -> u32 {
  static ID: AtomicU32 = AtomicU32::new(1);
  ID.fetch_add(1, Ordering::Relaxed)
}

/// Returns a generic `SysInv` exception with the given error message.
#[cold]
fn error<E>(error: E) -> Exception
where
  E: Display,
{
  Exception::new(ExceptionClass::Error, ExceptionGroup::SysInv, error)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
