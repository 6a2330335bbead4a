use std::time::Duration;

// -----------------------------------------------------------------------------
// Mailboxes
// -----------------------------------------------------------------------------

/// Default number of signals a mailbox buffers before senders block.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 100;

// -----------------------------------------------------------------------------
// State Machines
// -----------------------------------------------------------------------------

/// Diagnostic label of a process that observed cancellation.
pub const STATE_CANCELED: &str = "Canceled";

/// Diagnostic label of a process that was created but not yet activated.
pub const STATE_CREATED: &str = "Created";

// -----------------------------------------------------------------------------
// System - Scheduler Behavior
// -----------------------------------------------------------------------------

/// Default amount of parallelism the tokio runtime should use.
///
/// Note: This value is only used when a default value is not
///       retrievable from the host environment.
pub const DEFAULT_PARALLELISM: usize = 1;

/// Number of scheduler ticks before polling for external events.
pub const DEFAULT_EVENT_INTERVAL: u32 = 61;

/// Number of scheduler ticks before polling the global task queue.
pub const DEFAULT_GLOBAL_QUEUE_INTERVAL: u32 = 31;

/// Limit for additional threads spawned by the tokio runtime.
pub const DEFAULT_MAX_BLOCKING_THREADS: usize = 512;

/// How long to keep threads in the blocking pool alive.
pub const DEFAULT_THREAD_KEEP_ALIVE: Duration = Duration::from_millis(10 * 1000);

/// Stack size (in bytes) for worker threads.
pub const DEFAULT_THREAD_STACK_SIZE: usize = 2 * 1024 * 1024;

// -----------------------------------------------------------------------------
// System - Shutdown
// -----------------------------------------------------------------------------

/// How long to wait for a clean shutdown of the internal runtime.
pub const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

// -----------------------------------------------------------------------------
// System - Memory Allocation
// -----------------------------------------------------------------------------

/// Number of pre-allocated slots in a deferred-signal queue.
pub const CAP_DEFERRED_QUEUE: usize = 8;

/// Number of pre-allocated entries in a group's process table.
pub const CAP_GROUP_PROCS: usize = 16;
