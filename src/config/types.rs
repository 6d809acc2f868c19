use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListConfig,
}

/// Connection settings for the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API origin plus prefix (e.g., "https://alumni.example.edu/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Keep a cookie jar so the session cookie travels with every request.
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,
    /// Total request timeout in seconds. Absent means the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Connection timeout in seconds. Absent means the transport default.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
}

/// Defaults applied to every paginated list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Items requested per page when the caller does not override `limit`.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// How responses that resolve out of order are reconciled.
    #[serde(default)]
    pub race_policy: RacePolicy,
}

/// Reconciliation of concurrent dispatches of the same operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacePolicy {
    /// Each dispatch takes a sequence token; responses carrying a token older
    /// than the latest dispatch of the same kind are dropped.
    #[default]
    DiscardStale,
    /// Every response is applied as it arrives, so the last one to resolve
    /// wins regardless of dispatch order.
    LastResolved,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_with_credentials() -> bool {
    true
}

fn default_page_size() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            with_credentials: default_with_credentials(),
            timeout_seconds: None,
            connect_timeout_seconds: None,
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            race_policy: RacePolicy::default(),
        }
    }
}
