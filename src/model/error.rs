//! Error types for shelfview.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all fatal failures
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup failures
//!   - `std::io::Error` - Terminal/TUI failures
//! - [`NetworkError`] - the only error the paging core handles
//!
//! # Error Recovery Strategy
//!
//! Fetch failures are **non-fatal**: they are stored in the collection state and
//! shown to the user, who may retry. Nothing is retried automatically. A failed
//! first page replaces the grid with an error panel; a failed later page keeps
//! every loaded book on screen.

use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure at the page-fetch boundary.
///
/// Transport errors, timeouts, non-success statuses and undecodable bodies are
/// deliberately not distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct NetworkError {
    message: String,
}

impl NetworkError {
    /// Create a network error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::new(format!("request timed out: {e}"))
        } else if let Some(status) = e.status() {
            Self::new(format!("server responded with {status}"))
        } else {
            Self::new(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_displays_message() {
        let err = NetworkError::new("connection refused");
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(err.message(), "connection refused");
    }

    #[test]
    fn app_error_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: AppError = io.into();
        assert!(err.to_string().starts_with("Terminal error"));
    }
}
