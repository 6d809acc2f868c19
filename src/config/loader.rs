use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable selecting the API origin.
pub const API_URL_ENV: &str = "ALUMNI_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/alumni-client/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("alumni-client").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - `ALUMNI_API_URL` overrides `api.base_url` when set.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_base_url(None)
    }

    /// Like [`Config::load`], with `base_url` (e.g., from the command line)
    /// taking precedence over both the file and `ALUMNI_API_URL`.
    ///
    /// Validation runs once, after every override is applied.
    pub fn load_with_base_url(base_url: Option<String>) -> Result<Self, ConfigError> {
        let path = Self::config_path();
        let config = if path.exists() {
            Self::parse_file(&path)?
        } else {
            Config::default()
        };

        config.resolve(std::env::var(API_URL_ENV).ok(), base_url)
    }

    /// Applies the environment override, then the explicit one, and validates.
    pub fn resolve(
        mut self,
        env_base_url: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        self.apply_env_override(env_base_url);
        self.apply_env_override(base_url);
        self.validate()?;
        Ok(self)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Replaces the base URL with a non-empty override.
    pub fn apply_env_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(base_url = %url, "API base URL taken from environment");
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The base URL parses and uses http or https
    /// - The page size is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("Invalid api.base_url '{}': {}", self.api.base_url, e),
            }
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.base_url must use http or https, got '{}'",
                    url.scheme()
                ),
            });
        }

        if self.lists.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "lists.page_size must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
