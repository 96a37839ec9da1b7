//! Errors returned by the directory client.

use thiserror::Error;

/// Failure of a single request against the directory endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport failure (DNS, connect, TLS, reset).
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("Directory returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON shape.
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// Short message for the status line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Client(_) => "Network error: client unavailable".to_string(),
            ApiError::Connection { .. } => "Network error: directory unreachable".to_string(),
            ApiError::Status { status, .. } => format!("Network error: HTTP {}", status),
            ApiError::Decode { .. } => "Network error: unexpected response".to_string(),
        }
    }
}
