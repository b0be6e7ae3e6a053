//! Generative client error types.

use std::time::Duration;

use thiserror::Error;

/// Errors from a text-generation call.
#[derive(Debug, Error)]
pub enum GenAiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the API asked us to wait.
        retry_after_secs: u64,
    },

    /// No API key was configured.
    #[error("generative API key is not configured (GEMINI_API_KEY)")]
    MissingApiKey,

    /// The call did not complete within the configured bound.
    #[error("generation timed out after {timeout:?}")]
    Timeout {
        /// Configured bound on the call.
        timeout: Duration,
    },

    /// The prompt was refused by the model's safety filters.
    #[error("prompt blocked: {0}")]
    Blocked(String),

    /// The model answered with no text.
    #[error("model returned empty text")]
    EmptyResponse,
}
