//! Error types for API operations
//!
//! Every operation surfaces its failure directly to the caller; there is
//! no retry or fallback value inside the client.

use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the API
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to construct the HTTP transport (e.g., TLS or proxy misconfiguration)
    #[error("failed to initialize client: {0}")]
    Init(String),

    /// Transport failure: connect, send, or read of the response stream
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body exceeded the configured size cap
    #[error("response too large: {received} bytes exceeds maximum {limit} bytes")]
    ResponseTooLarge {
        /// Bytes received before the cap was hit
        received: usize,
        /// Configured cap
        limit: usize,
    },

    /// Server answered with a non-success status code
    #[error("unexpected HTTP status: {status}")]
    Http {
        /// Status code returned by the server
        status: reqwest::StatusCode,
    },

    /// Response body is not valid JSON, or does not match the expected shape
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
