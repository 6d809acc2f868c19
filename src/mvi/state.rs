//! Base trait for slice state in MVI architecture.

/// Marker trait for state fragments.
///
/// States should be:
/// - Immutable (Clone to hand snapshots to subscribers)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
