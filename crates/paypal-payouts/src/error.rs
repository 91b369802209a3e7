//! Error types for `PayPal` REST operations.
//!
//! Every fallible call in this crate returns [`PayPalResult`]. Transport and
//! decoding failures are wrapped; non-2xx responses become
//! [`PayPalError::Api`] with the platform's error body attached when it parses.

use thiserror::Error;

use crate::models::ErrorDetails;

/// Result type alias for `PayPal` operations.
pub type PayPalResult<T> = Result<T, PayPalError>;

/// Errors related to `PayPal` API operations.
#[derive(Debug, Error)]
pub enum PayPalError {
    /// A caller-supplied argument was rejected before any request was sent.
    #[error("{0}")]
    InvalidArgument(String),

    /// The API answered with a non-success HTTP status.
    #[error("PayPal API request failed with status {status}: {}", describe(details.as_ref(), body))]
    Api {
        /// HTTP status code
        status: u16,
        /// Parsed error body, if the response carried one
        details: Option<ErrorDetails>,
        /// Raw response body
        body: String,
    },

    /// Configuration is missing or malformed.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a configuration source failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PayPalError {
    /// HTTP status of an API failure, if this error came from a response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The platform's error name (e.g. `VALIDATION_ERROR`), if available.
    pub fn error_name(&self) -> Option<&str> {
        match self {
            Self::Api {
                details: Some(details),
                ..
            } => details.name.as_deref(),
            _ => None,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

fn describe(details: Option<&ErrorDetails>, body: &str) -> String {
    match details {
        Some(details) => details.to_string(),
        None if body.is_empty() => "<empty body>".to_string(),
        None => body.to_string(),
    }
}
