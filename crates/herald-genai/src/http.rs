//! Response checks for the Gemini API.
//!
//! Google APIs report failures as `{"error": {"code", "message", "status"}}`.
//! The reason is lifted out of that envelope so a logged failure reads
//! `INVALID_ARGUMENT: API key not valid` instead of a JSON blob. Quota
//! exhaustion (429) is kept apart from other failures.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::GenAiError;

/// Used when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Pass successful responses through; map everything else to [`GenAiError`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(GenAiError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }

    let body = resp.text().await.unwrap_or_default();
    Err(GenAiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// The envelope's reason, or the raw body when it is not an envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) if !error.message.is_empty() => {
            if error.status.is_empty() {
                error.message
            } else {
                format!("{}: {}", error.status, error.message)
            }
        }
        _ => body.trim().to_string(),
    }
}
