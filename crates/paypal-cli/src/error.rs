//! CLI-specific error types and mappings.
//!
//! This module provides the CLI error type and the mapping from library
//! errors to exit codes and user-facing messages.

use paypal_payouts::PayPalError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The API rejected the request or could not be reached.
    #[error("{0}")]
    Api(String),

    /// Argument or input error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Api(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<PayPalError> for CliError {
    fn from(err: PayPalError) -> Self {
        match err {
            PayPalError::InvalidArgument(message) => CliError::Arguments(message),
            PayPalError::Configuration { message } => CliError::Config(message),
            PayPalError::InvalidUrl(e) => CliError::Config(e.to_string()),
            PayPalError::Io(e) => CliError::Io(e.to_string()),
            other => CliError::Api(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Api("x".into()).exit_code(), 1);
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_from_paypal_error() {
        let err: CliError =
            PayPalError::InvalidArgument("AccessToken cannot be null or empty".into()).into();
        assert!(matches!(err, CliError::Arguments(_)));

        let err: CliError = PayPalError::Api {
            status: 401,
            details: None,
            body: "unauthorized".into(),
        }
        .into();
        assert!(matches!(err, CliError::Api(ref m) if m.contains("401")));
    }

    #[test]
    fn test_from_io_error() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.exit_code(), 74);
    }
}
