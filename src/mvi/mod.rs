//! Model-View-Intent primitives shared by every resource slice.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: a resource fragment, cloned out to subscribers
//! - **Intent**: lifecycle events produced around each HTTP call
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
