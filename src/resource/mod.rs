//! Generic resource slices.
//!
//! A slice owns one fragment of application state and performs the fetch and
//! mutate calls for one backend resource. State changes only go through
//! [`ResourceReducer`], fed by the pending/fulfilled/rejected intents the
//! slice dispatches around each HTTP call.

mod entity;
mod intent;
mod reducer;
mod slice;
mod state;

pub use entity::{Entity, ResourceDescriptor};
pub use intent::{Mutation, ResourceIntent};
pub use reducer::ResourceReducer;
pub use slice::{Outcome, ResourceSlice, Verb};
pub use state::{OpKind, OpStatus, OpTable, ResourceState};
