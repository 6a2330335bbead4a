use std::ops::Deref;
use triomphe::Arc;

use crate::proc::ProcData;
use crate::proc::ProcTable;

/// Process task wrapper that deregisters the process on drop.
///
/// Owned by the process worker. Creating it registers the process in its
/// group's table; dropping it (on a clean exit or while unwinding) removes
/// the entry again.
#[derive(Debug)]
pub(crate) struct ProcTask {
  inner: Arc<ProcData>,
  table: Arc<ProcTable>,
}

impl ProcTask {
  pub(crate) fn new(inner: Arc<ProcData>, table: Arc<ProcTable>) -> Self {
    table.insert(Arc::clone(&inner));

    Self { inner, table }
  }
}

impl Drop for ProcTask {
  fn drop(&mut self) {
    self.table.remove(self.inner.pid());

    tracing::trace!(target: "sdl", parent: self.inner.span(), "deregistered");
  }
}

impl Deref for ProcTask {
  type Target = ProcData;

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.inner
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use std::panic;
  use std::panic::AssertUnwindSafe;
  use triomphe::Arc;

  use crate::core::ProcessId;
  use crate::observer::NoopObserver;
  use crate::proc::ProcData;
  use crate::proc::ProcTable;
  use crate::proc::ProcTask;

  fn data() -> Arc<ProcData> {
    Arc::new(ProcData::new(ProcessId::next(), "p", std::sync::Arc::new(NoopObserver)))
  }

  #[test]
  fn test_registers_until_drop() {
    let table: Arc<ProcTable> = Arc::new(ProcTable::new());
    let task: ProcTask = ProcTask::new(data(), Arc::clone(&table));

    assert_eq!(table.len(), 1);
    assert_eq!(task.name(), "p");

    drop(task);

    assert_eq!(table.len(), 0);
  }

  #[test]
  fn test_deregisters_on_unwind() {
    let table: Arc<ProcTable> = Arc::new(ProcTable::new());
    let proc: Arc<ProcData> = data();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
      let _task: ProcTask = ProcTask::new(Arc::clone(&proc), Arc::clone(&table));
      panic!("boom");
    }));

    assert!(result.is_err());
    assert_eq!(table.len(), 0);
  }
}
