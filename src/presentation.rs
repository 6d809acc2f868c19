//! Maps fragment status and error to view affordances.

use serde::Serialize;

use crate::resource::{OpKind, OpStatus, ResourceState};

/// What a control bound to one operation should show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Affordance {
    pub submit_disabled: bool,
    pub show_spinner: bool,
    /// Inline, non-blocking error text.
    pub error_banner: Option<String>,
}

impl Affordance {
    /// Affordance for controls that trigger `kind`.
    ///
    /// Only errors raised by `kind` are shown; a fulfilled `kind` has
    /// already cleared its own stale error in the reducer.
    pub fn for_operation<E>(state: &ResourceState<E>, kind: OpKind) -> Self {
        let pending = state.status(kind) == OpStatus::Pending;
        let error_banner = match state.error_source() {
            Some(source) if source == kind => state.error.clone(),
            _ => None,
        };

        Self {
            submit_disabled: pending,
            show_spinner: pending,
            error_banner,
        }
    }

    /// Page-level banner: whatever error the fragment currently holds.
    pub fn banner<E>(state: &ResourceState<E>) -> Option<&str> {
        state.error()
    }
}
