//! Shared, one-shot termination signal for a group of processes.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tokio_util::sync::CancellationToken;
use tokio_util::sync::WaitForCancellationFuture;

/// A shared, idempotent, one-shot termination signal.
///
/// Every clone observes the same state. The token starts open and moves to
/// closed exactly once; further calls to [`close`] do nothing. Once closed,
/// every pending and future [`closed`] wait completes immediately.
///
/// [`close`]: CancelToken::close
/// [`closed`]: CancelToken::closed
#[derive(Clone, Default)]
#[repr(transparent)]
pub struct CancelToken {
  inner: CancellationToken,
}

impl CancelToken {
  /// Creates a new open token.
  #[inline]
  pub fn new() -> Self {
    Self {
      inner: CancellationToken::new(),
    }
  }

  /// Closes the token, waking every waiter.
  ///
  /// Closing an already-closed token is a no-op.
  pub fn close(&self) {
    if self.inner.is_cancelled() {
      return;
    }

    self.inner.cancel();

    tracing::debug!(target: "sdl", "cancel token closed");
  }

  /// Returns `true` if the token has been closed.
  #[inline]
  pub fn is_closed(&self) -> bool {
    self.inner.is_cancelled()
  }

  /// Waits until the token is closed.
  #[inline]
  pub fn closed(&self) -> WaitForCancellationFuture<'_> {
    self.inner.cancelled()
  }
}

impl Debug for CancelToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    if self.is_closed() {
      f.write_str("CancelToken(closed)")
    } else {
      f.write_str("CancelToken(open)")
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
