//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (open the form, cancel) or the outcome
/// of a request (list loaded, save failed).
pub trait Intent: Send + 'static {}
