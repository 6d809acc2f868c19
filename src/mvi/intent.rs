//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (filter change, page change, clear error)
/// - Request lifecycle events (pending, fulfilled, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
