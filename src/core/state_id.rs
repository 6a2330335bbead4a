use std::fmt::Debug;

/// Identifier of one state in a machine's closed state set.
///
/// The name is used as the process's diagnostic state label.
pub trait StateId: Copy + Debug + Eq + Send + Sync + 'static {
  /// Returns the human-readable state name.
  fn name(&self) -> &'static str;
}
