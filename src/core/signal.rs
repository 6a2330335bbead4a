use std::fmt::Debug;

/// An application-defined message exchanged between processes.
///
/// Implement this for the enum describing one process's signal alphabet. The
/// tag names the variant and is what observers and logs report; the [`Debug`]
/// rendering is reported as the signal value.
///
/// # Examples
///
/// ```
/// use sdl_spec::core::Signal;
///
/// #[derive(Debug)]
/// enum Counter {
///   Inc(u32),
///   Dec,
/// }
///
/// impl Signal for Counter {
///   fn tag(&self) -> &'static str {
///     match self {
///       Self::Inc(_) => "Inc",
///       Self::Dec => "Dec",
///     }
///   }
/// }
///
/// assert_eq!(Counter::Inc(1).tag(), "Inc");
/// ```
pub trait Signal: Debug + Send + Sync + 'static {
  /// Returns the name of the signal variant.
  fn tag(&self) -> &'static str;
}
