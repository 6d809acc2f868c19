//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use alumni_client::api::ApiClient;
use alumni_client::config::{ApiConfig, RacePolicy};
use alumni_client::domain::{Event, EVENTS};
use alumni_client::resource::ResourceSlice;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_client(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    })
    .expect("Failed to build API client")
}

pub fn events_slice(base_url: &str, policy: RacePolicy) -> ResourceSlice<Event> {
    ResourceSlice::new(EVENTS, api_client(base_url), policy)
}

/// JSON for an event document.
pub fn event_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "description": "",
        "registeredCount": 0,
    })
}

/// `count` events with ids `{prefix}{n}` starting at `first`.
pub fn events_json(prefix: &str, first: usize, count: usize) -> Value {
    Value::Array(
        (first..first + count)
            .map(|n| event_json(&format!("{}{}", prefix, n), &format!("Event {}", n)))
            .collect(),
    )
}

/// Create a temporary config file with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
