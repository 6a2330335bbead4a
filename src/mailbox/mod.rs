//! Bounded FIFO signal queues.
//!
//! A mailbox is a bounded multi-producer single-consumer queue tied to the
//! [`CancelToken`] of its process group:
//!
//! - [`MailSend::send`] blocks while the mailbox is full and never rejects a
//!   signal while the group is open.
//! - [`MailRecv::recv`] blocks while the mailbox is empty, racing the next
//!   signal against cancellation.
//!
//! Signals are delivered in the order their enqueue completed. Once the
//! group is closed, sends return immediately and the signal is dropped.
//!
//! [`CancelToken`]: crate::cancel::CancelToken

mod channel;

pub use self::channel::MailRecv;
pub use self::channel::MailSend;
pub use self::channel::Received;
pub use self::channel::channel;
