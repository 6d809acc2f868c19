//! Client configuration: API origin, credentials and list defaults.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV};
pub use types::{ApiConfig, Config, ListConfig, RacePolicy};
