// Adapted from:
//
// https://docs.rs/futures/0.3.31/futures/future/struct.CatchUnwind.html

use pin_project_lite::pin_project;
use std::panic;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::Context;
use std::task::Poll;

use crate::utils::Panic;

pin_project! {
  /// Future that resolves to [`Panic`] if polling the inner future unwinds.
  ///
  /// Process workers own nothing that another process could observe in a
  /// broken state, so the inner future is always treated as unwind safe.
  #[derive(Debug)]
  #[repr(transparent)]
  pub(crate) struct CatchUnwind<F> {
    #[pin]
    future: F,
  }
}

impl<F> CatchUnwind<F>
where
  F: Future,
{
  #[inline]
  pub(crate) const fn new(future: F) -> Self {
    Self { future }
  }
}

impl<F> Future for CatchUnwind<F>
where
  F: Future,
{
  type Output = Result<F::Output, Panic>;

  fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
    let future: Pin<&mut F> = self.project().future;
    let assert: AssertUnwindSafe<_> = AssertUnwindSafe(|| future.poll(context));

    panic::catch_unwind(assert).map_err(Panic::new)?.map(Ok)
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::utils::CatchUnwind;
  use crate::utils::Panic;

  #[tokio::test]
  async fn test_ready() {
    let result: Result<u8, Panic> = CatchUnwind::new(async { 7 }).await;

    assert_eq!(result.unwrap(), 7);
  }

  #[tokio::test]
  async fn test_panic() {
    let fail: bool = true;
    let result: Result<(), Panic> = CatchUnwind::new(async move {
      if fail {
        panic!("worker failed");
      }
    })
    .await;

    assert_eq!(result.unwrap_err().message(), "worker failed");
  }
}
