use hashbrown::HashMap;
use parking_lot::RwLock;
use triomphe::Arc;

use crate::consts;
use crate::core::ProcessId;
use crate::proc::ProcData;
use crate::raise;

// -----------------------------------------------------------------------------
// Process Info
// -----------------------------------------------------------------------------

/// A point-in-time view of one live process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessInfo {
  /// Identifier of the process.
  pub pid: ProcessId,
  /// Name given at creation.
  pub name: String,
  /// Current diagnostic state label.
  pub state: &'static str,
}

// -----------------------------------------------------------------------------
// Proc Table
// -----------------------------------------------------------------------------

/// Registry of the live processes of one group.
#[derive(Debug)]
pub(crate) struct ProcTable {
  inner: RwLock<HashMap<ProcessId, Arc<ProcData>>>,
}

impl ProcTable {
  pub(crate) fn new() -> Self {
    Self {
      inner: RwLock::new(HashMap::with_capacity(consts::CAP_GROUP_PROCS)),
    }
  }

  /// Registers a process.
  ///
  /// # Panics
  ///
  /// Raises a `SysInv` exception if the process is already registered.
  pub(crate) fn insert(&self, data: Arc<ProcData>) {
    let pid: ProcessId = data.pid();

    if self.inner.write().insert(pid, data).is_some() {
      raise!(Error, SysInv, format!("duplicate process registration: {pid}"));
    }
  }

  pub(crate) fn remove(&self, pid: ProcessId) -> Option<Arc<ProcData>> {
    self.inner.write().remove(&pid)
  }

  /// Returns a snapshot of every registered process, ordered by pid.
  pub(crate) fn list(&self) -> Vec<ProcessInfo> {
    let mut list: Vec<ProcessInfo> = self.inner.read().values().map(|data| data.info()).collect();

    list.sort_unstable_by_key(|info| info.pid);
    list
  }

  pub(crate) fn len(&self) -> usize {
    self.inner.read().len()
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
  use crate::proc::ProcessInfo;

  fn data(name: &str) -> Arc<ProcData> {
    Arc::new(ProcData::new(ProcessId::next(), name, std::sync::Arc::new(NoopObserver)))
  }

  #[test]
  fn test_insert_remove() {
    let table: ProcTable = ProcTable::new();
    let proc: Arc<ProcData> = data("a");

    table.insert(Arc::clone(&proc));
    assert_eq!(table.len(), 1);

    assert!(table.remove(proc.pid()).is_some());
    assert!(table.remove(proc.pid()).is_none());
    assert_eq!(table.len(), 0);
  }

  #[test]
  fn test_insert_duplicate() {
    let table: ProcTable = ProcTable::new();
    let proc: Arc<ProcData> = data("a");

    table.insert(Arc::clone(&proc));

    assert!(panic::catch_unwind(AssertUnwindSafe(|| table.insert(Arc::clone(&proc)))).is_err());
  }

  #[test]
  fn test_list_sorted_by_pid() {
    let table: ProcTable = ProcTable::new();
    let a: Arc<ProcData> = data("a");
    let b: Arc<ProcData> = data("b");

    table.insert(Arc::clone(&b));
    table.insert(Arc::clone(&a));

    let list: Vec<ProcessInfo> = table.list();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "a");
    assert_eq!(list[1].name, "b");
  }
}
