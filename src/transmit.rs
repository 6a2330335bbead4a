//! Scripted, delay-timed signal injection.
//!
//! A transmission script encodes one deterministic stimulus timeline. The
//! entries of a script are executed strictly one after another: wait the
//! entry's delay, send its signal (blocking while the target is full), then
//! move on to the next entry.
//!
//! ```
//! use sdl_spec::core::Signal;
//! use sdl_spec::group::Group;
//! use sdl_spec::transmit::{self, Transmission};
//!
//! #[derive(Debug)]
//! struct Ping;
//!
//! impl Signal for Ping {
//!   fn tag(&self) -> &'static str {
//!     "Ping"
//!   }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let group: Group = Group::default();
//! let (send, _sink) = group.sink::<Ping>("out");
//!
//! transmit::execute([
//!   Transmission::new(0, &send, Ping),
//!   Transmission::new(5, &send, Ping),
//! ])
//! .await;
//!
//! group.close();
//! # }
//! ```

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result;
use std::pin::Pin;
use std::time::Duration;
use tokio::time;
use tracing::trace;

use crate::core::Signal;
use crate::mailbox::MailSend;

type Delivery = Pin<Box<dyn Future<Output = ()> + Send>>;

// -----------------------------------------------------------------------------
// Transmission
// -----------------------------------------------------------------------------

/// One scheduled signal delivery.
///
/// Transmissions erase the signal type, so one script may address mailboxes
/// of different signal alphabets.
pub struct Transmission {
  delay: Duration,
  tag: &'static str,
  delivery: Delivery,
}

impl Transmission {
  /// Schedules `signal` for `target`, `delay_ms` milliseconds after the
  /// previous entry of the script was delivered.
  pub fn new<S>(delay_ms: u64, target: &MailSend<S>, signal: S) -> Self
  where
    S: Signal,
  {
    let target: MailSend<S> = target.clone();

    Self {
      delay: Duration::from_millis(delay_ms),
      tag: signal.tag(),
      delivery: Box::pin(async move { target.send(signal).await }),
    }
  }

  /// Returns the delay preceding the delivery.
  #[inline]
  pub const fn delay(&self) -> Duration {
    self.delay
  }

  /// Returns the tag of the scheduled signal.
  #[inline]
  pub const fn tag(&self) -> &'static str {
    self.tag
  }
}

impl Debug for Transmission {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    f.debug_struct("Transmission")
      .field("delay", &self.delay)
      .field("tag", &self.tag)
      .finish_non_exhaustive()
  }
}

// -----------------------------------------------------------------------------
// Execution
// -----------------------------------------------------------------------------

/// Executes `script` strictly in order.
pub async fn execute<I>(script: I)
where
  I: IntoIterator<Item = Transmission>,
{
  for (index, transmission) in script.into_iter().enumerate() {
    time::sleep(transmission.delay).await;

    trace!(
      target: "sdl",
      index,
      tag = transmission.tag,
      delay = ?transmission.delay,
      "transmitting",
    );

    transmission.delivery.await;
  }
}

/// Sends every signal to `target` in order, waiting `delay_ms` milliseconds
/// after each send.
pub async fn send_with_delay<S, I>(target: &MailSend<S>, signals: I, delay_ms: u64)
where
  S: Signal,
  I: IntoIterator<Item = S>,
{
  let delay: Duration = Duration::from_millis(delay_ms);

  for signal in signals {
    target.send(signal).await;
    time::sleep(delay).await;
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
