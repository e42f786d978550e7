//! Error types for backend API operations.

use std::io;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the course-generation backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// Transport-level failure (connection refused, timeout, TLS, or a
  /// malformed response body).
  #[error("HTTP request failed")]
  Transport(#[from] ureq::Error),

  /// The server answered with an error status.
  #[error("HTTP error: {status} - {body}")]
  Http {
    /// HTTP status code.
    status: u16,
    /// Response body, which may carry error details from the backend.
    body:   String,
  },

  /// JSON serialization/deserialization error.
  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),

  /// I/O error while reading or writing the session file.
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  /// An authenticated endpoint was called without a session token.
  #[error("not logged in")]
  Unauthenticated,
}
