use std::collections::VecDeque;
use std::mem;

use crate::consts;

/// Signals saved during the current state activation.
///
/// The queue belongs to one activation generation: [`take`] hands the whole
/// queue to the next activation for replay and leaves a fresh, empty queue
/// behind, so signals saved again during the replay land in the following
/// generation.
///
/// [`take`]: Deferred::take
#[derive(Debug)]
pub(crate) struct Deferred<S> {
  queue: VecDeque<S>,
}

impl<S> Deferred<S> {
  #[inline]
  pub(crate) fn new() -> Self {
    Self {
      queue: VecDeque::with_capacity(consts::CAP_DEFERRED_QUEUE),
    }
  }

  /// Appends `signal` in save order.
  #[inline]
  pub(crate) fn save(&mut self, signal: S) {
    self.queue.push_back(signal);
  }

  /// Moves every signal in `other` to the back of this queue.
  #[inline]
  pub(crate) fn append(&mut self, other: &mut VecDeque<S>) {
    self.queue.append(other);
  }

  /// Takes the saved signals, leaving the queue empty.
  #[inline]
  pub(crate) fn take(&mut self) -> VecDeque<S> {
    mem::replace(&mut self.queue, VecDeque::with_capacity(consts::CAP_DEFERRED_QUEUE))
  }

  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.queue.len()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::collections::VecDeque;

  use crate::proc::Deferred;

  #[test]
  fn test_take_preserves_save_order() {
    let mut deferred: Deferred<u8> = Deferred::new();

    deferred.save(1);
    deferred.save(2);
    deferred.save(3);

    assert_eq!(deferred.take(), [1, 2, 3]);
  }

  #[test]
  fn test_take_clears() {
    let mut deferred: Deferred<u8> = Deferred::new();

    deferred.save(1);

    let _replay: VecDeque<u8> = deferred.take();

    assert_eq!(deferred.len(), 0);
    assert!(deferred.take().is_empty());
  }

  #[test]
  fn test_saves_after_take_start_new_generation() {
    let mut deferred: Deferred<u8> = Deferred::new();

    deferred.save(1);

    let replay: VecDeque<u8> = deferred.take();

    deferred.save(2);

    assert_eq!(replay, [1]);
    assert_eq!(deferred.len(), 1);
    assert_eq!(deferred.take(), [2]);
  }

  #[test]
  fn test_append_after_saved() {
    let mut deferred: Deferred<u8> = Deferred::new();
    let mut rest: VecDeque<u8> = VecDeque::from([3, 4]);

    deferred.save(1);
    deferred.append(&mut rest);

    assert!(rest.is_empty());
    assert_eq!(deferred.take(), [1, 3, 4]);
  }
}
