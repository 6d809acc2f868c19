//! Error types for the HTTP boundary.
//!
//! The three failure families (transport, non-2xx, malformed body) stay
//! distinct here so logs keep the detail. Slices collapse them into one
//! string through [`ApiError::user_message`].

use thiserror::Error;

/// Message surfaced when nothing more specific is available.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur while talking to the REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint URL could not be formed from the base URL and path.
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request body could not be serialized.
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    /// Connection, TLS or body transfer failure.
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status, or with `success: false`.
    #[error("Server error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the envelope contract.
    #[error("Malformed response: {reason}")]
    Malformed { reason: String },
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The single string shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Status { status, .. } if *status >= 400 => {
                format!("Request failed with status code {}", status)
            }
            ApiError::Transport { .. } => "Network error. Check your connection.".to_string(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}
