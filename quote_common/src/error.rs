//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of both processes: I/O on the
//! output file, JSON decoding, HTTP transport, SQLite persistence and timeouts, so
//! that every crate in the workspace can propagate a single error type.
use std::io;
use std::sync::PoisonError;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Transport-level HTTP failure (connect, read, invalid URL).
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote side answered with a non-success status code.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// Numeric status code returned by the remote side.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// SQLite open, schema or insert failure.
    #[cfg(feature = "sqlite")]
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An operation did not finish within its configured bound.
    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        /// Short label of what was being waited on.
        operation: &'static str,
        /// The bound that was exceeded.
        after: Duration,
    },

    /// Invalid or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background task panicked or was cancelled before producing a result.
    #[error("Background task failed: {0}")]
    Task(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}

impl QuoteError {
    /// Returns `true` when the error is a timeout of any kind.
    pub fn is_timeout(&self) -> bool {
        match self {
            QuoteError::Timeout { .. } => true,
            #[cfg(feature = "http")]
            QuoteError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_reports_millis() {
        let err = QuoteError::Timeout {
            operation: "provider request",
            after: Duration::from_millis(200),
        };
        assert_eq!(err.to_string(), "provider request timed out after 200ms");
        assert!(err.is_timeout());
    }

    #[test]
    fn status_is_not_a_timeout() {
        let err = QuoteError::Status {
            status: 503,
            url: "http://localhost:8080/cotacao".to_string(),
        };
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("503"));
    }
}
