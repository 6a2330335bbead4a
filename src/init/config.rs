use std::thread;
use std::time::Duration;
use tracing::Level;

use crate::consts;

/// Configuration of the runtime built by [`block_on`].
///
/// [`block_on`]: crate::init::block_on
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
  // ---------------------------------------------------------------------------
  // Tokio Runtime Configuration
  // ---------------------------------------------------------------------------
  pub rt_event_interval: u32,
  pub rt_global_queue_interval: u32,
  pub rt_max_blocking_threads: usize,
  pub rt_shutdown_timeout: Duration,
  pub rt_thread_keep_alive: Duration,
  pub rt_thread_stack_size: usize,
  pub rt_worker_threads: usize,
  // ---------------------------------------------------------------------------
  // Tracing Subscriber Configuration
  // ---------------------------------------------------------------------------
  pub tracing_source_file: bool,
  pub tracing_source_line: bool,
  pub tracing_source_name: bool,
  pub tracing_thread_info: bool,
  pub tracing_verbose: bool,
  pub tracing_very_verbose: bool,
}

impl RuntimeConfig {
  #[inline]
  pub fn new() -> Self {
    Self {
      rt_event_interval: consts::DEFAULT_EVENT_INTERVAL,
      rt_global_queue_interval: consts::DEFAULT_GLOBAL_QUEUE_INTERVAL,
      rt_max_blocking_threads: consts::DEFAULT_MAX_BLOCKING_THREADS,
      rt_shutdown_timeout: consts::SHUTDOWN_TIMEOUT,
      rt_thread_keep_alive: consts::DEFAULT_THREAD_KEEP_ALIVE,
      rt_thread_stack_size: consts::DEFAULT_THREAD_STACK_SIZE,
      rt_worker_threads: available_cpus(),
      tracing_source_file: false,
      tracing_source_line: false,
      tracing_source_name: false,
      tracing_thread_info: false,
      tracing_verbose: false,
      tracing_very_verbose: false,
    }
  }

  /// Returns the most verbose level the tracing subscriber records.
  #[inline]
  pub const fn tracing_filter(&self) -> Level {
    if self.tracing_very_verbose {
      Level::TRACE
    } else if self.tracing_verbose {
      Level::DEBUG
    } else {
      Level::INFO
    }
  }
}

impl Default for RuntimeConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Returns the number of available CPU cores.
///
/// Falls back to [`DEFAULT_PARALLELISM`] if CPU detection fails.
///
/// [`DEFAULT_PARALLELISM`]: consts::DEFAULT_PARALLELISM
fn available_cpus() -> usize {
  match thread::available_parallelism() {
    Ok(count) => count.get(),
    Err(_) => consts::DEFAULT_PARALLELISM,
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use tracing::Level;

  use crate::consts;
  use crate::init::RuntimeConfig;

  #[test]
  fn test_defaults() {
    let config: RuntimeConfig = RuntimeConfig::default();

    assert!(config.rt_worker_threads >= 1);
    assert_eq!(config.rt_shutdown_timeout, consts::SHUTDOWN_TIMEOUT);
    assert_eq!(config.tracing_filter(), Level::INFO);
  }

  #[test]
  fn test_tracing_filter() {
    let mut config: RuntimeConfig = RuntimeConfig::new();

    config.tracing_verbose = true;
    assert_eq!(config.tracing_filter(), Level::DEBUG);

    config.tracing_very_verbose = true;
    assert_eq!(config.tracing_filter(), Level::TRACE);
  }
}
