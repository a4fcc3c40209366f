//! Base trait for view state.

/// Marker trait for state a view renders from.
///
/// States are plain values: cloned to be replaced, compared to detect
/// changes, defaulted before the first load.
pub trait ViewState: Clone + PartialEq + Default + Send + 'static {}
