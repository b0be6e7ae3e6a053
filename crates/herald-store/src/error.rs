//! Store error types.

use thiserror::Error;

/// Errors from reading the announcement collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error (includes request timeouts).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The store is throttling or temporarily down (429, 503).
    #[error("store unavailable ({status})")]
    Unavailable {
        /// HTTP status code returned by the store.
        status: u16,
    },

    /// Obtaining an access token for the service account failed.
    #[error("auth error: {0}")]
    Auth(String),
}
