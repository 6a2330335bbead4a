use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;

use crate::cancel::CancelToken;
use crate::core::Signal;
use crate::raise;

/// Creates a bounded mailbox holding up to `capacity` signals.
///
/// # Panics
///
/// Raises a `BadArg` exception if `capacity` is zero.
pub fn channel<S>(capacity: usize, token: CancelToken) -> (MailSend<S>, MailRecv<S>)
where
  S: Signal,
{
  if capacity == 0 {
    raise!(Error, BadArg, "mailbox capacity must be non-zero");
  }

  let channel: (Sender<S>, Receiver<S>) = mpsc::channel(capacity);

  (
    MailSend {
      inner: channel.0,
      token: token.clone(),
    },
    MailRecv {
      inner: channel.1,
      token,
    },
  )
}

// -----------------------------------------------------------------------------
// Received
// -----------------------------------------------------------------------------

/// The outcome of waiting on a mailbox.
#[derive(Debug, PartialEq, Eq)]
pub enum Received<S> {
  /// The next signal in FIFO order.
  Signal(S),
  /// The group was closed; the receiver should terminate.
  Canceled,
}

// -----------------------------------------------------------------------------
// Mail Send
// -----------------------------------------------------------------------------

/// The sending side of a mailbox.
///
/// Cheap to clone; every clone enqueues into the same mailbox.
pub struct MailSend<S> {
  inner: Sender<S>,
  token: CancelToken,
}

impl<S> MailSend<S>
where
  S: Signal,
{
  /// Enqueues `signal`, waiting while the mailbox is full.
  ///
  /// If the group is closed before the signal is enqueued, or the receiving
  /// side is gone, the signal is dropped and this returns immediately.
  pub async fn send(&self, signal: S) {
    let tag: &'static str = signal.tag();

    if self.token.is_closed() {
      tracing::trace!(target: "sdl", tag, "signal dropped - group closed");
      return;
    }

    tokio::select! {
      biased;
      _ = self.token.closed() => {
        tracing::trace!(target: "sdl", tag, "signal dropped - group closed");
      }
      result = self.inner.send(signal) => {
        if result.is_err() {
          tracing::trace!(target: "sdl", tag, "signal dropped - mailbox closed");
        }
      }
    }
  }

  /// Returns the fixed number of signals this mailbox buffers.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.inner.max_capacity()
  }

  /// Returns `true` if sends to this mailbox are dropped.
  #[inline]
  pub fn is_closed(&self) -> bool {
    self.token.is_closed() || self.inner.is_closed()
  }

  /// Returns `true` if both handles send to the same mailbox.
  #[inline]
  pub fn same_mailbox(&self, other: &Self) -> bool {
    self.inner.same_channel(&other.inner)
  }
}

impl<S> Clone for MailSend<S> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
      token: self.token.clone(),
    }
  }
}

impl<S> Debug for MailSend<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("MailSend(..)")
  }
}

// -----------------------------------------------------------------------------
// Mail Recv
// -----------------------------------------------------------------------------

/// The receiving side of a mailbox.
pub struct MailRecv<S> {
  inner: Receiver<S>,
  token: CancelToken,
}

impl<S> MailRecv<S>
where
  S: Signal,
{
  /// Waits for the next signal or for cancellation, whichever is first.
  ///
  /// Once the group is closed this returns `Canceled` immediately, even if
  /// signals are still queued. When a signal and cancellation become ready
  /// during the same wait the branch taken is chosen at random; callers must
  /// handle either outcome. When every sender is gone the mailbox waits for
  /// cancellation.
  pub async fn recv(&mut self) -> Received<S> {
    if self.token.is_closed() {
      return Received::Canceled;
    }

    tokio::select! {
      _ = self.token.closed() => Received::Canceled,
      signal = self.inner.recv() => match signal {
        Some(signal) => Received::Signal(signal),
        None => {
          self.token.closed().await;
          Received::Canceled
        }
      }
    }
  }

  /// Returns the fixed number of signals this mailbox buffers.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.inner.max_capacity()
  }
}

impl<S> Debug for MailRecv<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("MailRecv(..)")
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::time::Duration;
  use tokio::time;

  use crate::cancel::CancelToken;
  use crate::core::Signal;
  use crate::mailbox::MailRecv;
  use crate::mailbox::MailSend;
  use crate::mailbox::Received;
  use crate::mailbox::channel;

  #[derive(Debug, PartialEq, Eq)]
  struct Num(u32);

  impl Signal for Num {
    fn tag(&self) -> &'static str {
      "Num"
    }
  }

  #[test]
  #[should_panic(expected = "badarg")]
  fn test_zero_capacity() {
    let _ignore: (MailSend<Num>, MailRecv<Num>) = channel(0, CancelToken::new());
  }

  #[test]
  fn test_capacity() {
    let (send, recv): (MailSend<Num>, MailRecv<Num>) = channel(7, CancelToken::new());

    assert_eq!(send.capacity(), 7);
    assert_eq!(recv.capacity(), 7);
  }

  #[test]
  fn test_clone_same_mailbox() {
    let (send, _recv): (MailSend<Num>, MailRecv<Num>) = channel(1, CancelToken::new());
    let (other, _orecv): (MailSend<Num>, MailRecv<Num>) = channel(1, CancelToken::new());

    assert!(send.same_mailbox(&send.clone()));
    assert!(!send.same_mailbox(&other));
  }

  #[tokio::test]
  async fn test_fifo() {
    let (send, mut recv): (MailSend<Num>, MailRecv<Num>) = channel(16, CancelToken::new());

    for index in 0..16 {
      send.send(Num(index)).await;
    }

    for index in 0..16 {
      assert_eq!(recv.recv().await, Received::Signal(Num(index)));
    }
  }

  #[tokio::test(start_paused = true)]
  async fn test_send_blocks_while_full() {
    let (send, mut recv): (MailSend<Num>, MailRecv<Num>) = channel(2, CancelToken::new());

    send.send(Num(1)).await;
    send.send(Num(2)).await;

    let blocked = time::timeout(Duration::from_millis(50), send.send(Num(3))).await;
    assert!(blocked.is_err());

    assert_eq!(recv.recv().await, Received::Signal(Num(1)));

    send.send(Num(3)).await;

    assert_eq!(recv.recv().await, Received::Signal(Num(2)));
    assert_eq!(recv.recv().await, Received::Signal(Num(3)));
  }

  #[tokio::test(start_paused = true)]
  async fn test_recv_observes_cancel() {
    let token: CancelToken = CancelToken::new();
    let (_send, mut recv): (MailSend<Num>, MailRecv<Num>) = channel(2, token.clone());

    let waiter = tokio::spawn(async move { recv.recv().await });

    time::sleep(Duration::from_millis(10)).await;
    assert!(!waiter.is_finished());

    token.close();

    assert_eq!(waiter.await.unwrap(), Received::Canceled);
  }

  #[tokio::test]
  async fn test_recv_after_cancel_is_immediate() {
    let token: CancelToken = CancelToken::new();
    let (_send, mut recv): (MailSend<Num>, MailRecv<Num>) = channel(2, token.clone());

    token.close();

    assert_eq!(recv.recv().await, Received::Canceled);
    assert_eq!(recv.recv().await, Received::Canceled);
  }

  #[tokio::test]
  async fn test_recv_after_cancel_skips_queued() {
    let token: CancelToken = CancelToken::new();
    let (send, mut recv): (MailSend<Num>, MailRecv<Num>) = channel(8, token.clone());

    for index in 0..8 {
      send.send(Num(index)).await;
    }

    token.close();

    for _ in 0..64 {
      assert_eq!(recv.recv().await, Received::Canceled);
    }
  }

  #[tokio::test(start_paused = true)]
  async fn test_recv_without_senders_waits_for_cancel() {
    let token: CancelToken = CancelToken::new();
    let (send, mut recv): (MailSend<Num>, MailRecv<Num>) = channel(2, token.clone());

    drop(send);

    let pending = time::timeout(Duration::from_millis(50), recv.recv()).await;
    assert!(pending.is_err());

    token.close();

    assert_eq!(recv.recv().await, Received::Canceled);
  }

  #[tokio::test(start_paused = true)]
  async fn test_send_after_cancel_is_dropped() {
    let token: CancelToken = CancelToken::new();
    let (send, _recv): (MailSend<Num>, MailRecv<Num>) = channel(1, token.clone());

    send.send(Num(1)).await;
    token.close();

    assert!(send.is_closed());

    // The mailbox is full, but the send must still return at once.
    let result = time::timeout(Duration::from_millis(1), send.send(Num(2))).await;
    assert!(result.is_ok());
  }

  #[tokio::test(start_paused = true)]
  async fn test_blocked_send_released_by_cancel() {
    let token: CancelToken = CancelToken::new();
    let (send, _recv): (MailSend<Num>, MailRecv<Num>) = channel(1, token.clone());

    send.send(Num(1)).await;

    let blocked = tokio::spawn(async move { send.send(Num(2)).await });

    time::sleep(Duration::from_millis(10)).await;
    assert!(!blocked.is_finished());

    token.close();
    blocked.await.unwrap();
  }

  #[tokio::test]
  async fn test_send_after_receiver_dropped() {
    let (send, recv): (MailSend<Num>, MailRecv<Num>) = channel(1, CancelToken::new());

    drop(recv);

    assert!(send.is_closed());
    send.send(Num(1)).await;
  }
}
