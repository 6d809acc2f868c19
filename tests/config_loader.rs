mod common;

use alumni_client::config::{Config, ConfigError, RacePolicy};
use common::temp_config;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.base_url, "http://localhost:5000/api");
    assert!(config.api.with_credentials);
    assert_eq!(config.api.timeout_seconds, None);
    assert_eq!(config.api.connect_timeout_seconds, None);
    assert_eq!(config.lists.page_size, 10);
    assert_eq!(config.lists.race_policy, RacePolicy::DiscardStale);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("alumni-client/config.toml"));
}

#[test]
fn test_load_from_full_file() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://alumni.example.edu/api"
with_credentials = false
timeout_seconds = 30
connect_timeout_seconds = 5

[lists]
page_size = 20
race_policy = "last_resolved"
"#,
    );

    let config = Config::load_from(&path).expect("config should load");

    assert_eq!(config.api.base_url, "https://alumni.example.edu/api");
    assert!(!config.api.with_credentials);
    assert_eq!(config.api.timeout_seconds, Some(30));
    assert_eq!(config.api.connect_timeout_seconds, Some(5));
    assert_eq!(config.lists.page_size, 20);
    assert_eq!(config.lists.race_policy, RacePolicy::LastResolved);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let (_dir, path) = temp_config("[lists]\npage_size = 25\n");

    let config = Config::load_from(&path).expect("config should load");

    assert_eq!(config.lists.page_size, 25);
    assert_eq!(config.api, Config::default().api);
    assert_eq!(config.lists.race_policy, RacePolicy::DiscardStale);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_unknown_race_policy_is_parse_error() {
    let (_dir, path) = temp_config("[lists]\nrace_policy = \"first_wins\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_page_size_fails_validation() {
    let (_dir, path) = temp_config("[lists]\npage_size = 0\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_non_http_base_url_fails_validation() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://files.example.edu\"\n");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

#[test]
fn test_env_override_replaces_base_url() {
    let mut config = Config::default();

    config.apply_env_override(Some("  https://staging.example.edu/api  ".to_string()));
    assert_eq!(config.api.base_url, "https://staging.example.edu/api");

    config.apply_env_override(Some("   ".to_string()));
    assert_eq!(config.api.base_url, "https://staging.example.edu/api");

    config.apply_env_override(None);
    assert_eq!(config.api.base_url, "https://staging.example.edu/api");
}

#[test]
fn test_explicit_base_url_wins_over_invalid_env() {
    let config = Config::default()
        .resolve(
            Some("not a url".to_string()),
            Some("https://alumni.example.edu/api".to_string()),
        )
        .expect("explicit base URL should replace the bad env value");

    assert_eq!(config.api.base_url, "https://alumni.example.edu/api");
}

#[test]
fn test_invalid_env_without_explicit_url_fails() {
    let err = Config::default()
        .resolve(Some("ftp://files.example.edu".to_string()), None)
        .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
