//! HTTP boundary: client, envelope parsing and error taxonomy.

mod client;
mod envelope;
mod error;

pub use client::ApiClient;
pub use envelope::{Envelope, ListPage, Pagination};
pub use error::{ApiError, FALLBACK_MESSAGE};
