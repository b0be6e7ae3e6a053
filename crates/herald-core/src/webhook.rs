//! Webhook wire types.
//!
//! The shape is dictated by the conversational platform: the query arrives at
//! `queryResult.queryText` and the answer goes back in `fulfillmentText`.
//! Everything else in the inbound payload is ignored.

use serde::{Deserialize, Serialize};

/// Returned when the query is empty or could not be read.
pub const NOT_UNDERSTOOD_TEXT: &str = "Sorry, I didn't get your question. Please try again.";

/// Returned when a collaborator fails while handling an otherwise valid query.
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong while processing your request.";

/// Inbound fulfillment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    #[serde(default)]
    pub query_result: Option<QueryResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    #[serde(default)]
    pub query_text: Option<String>,
}

impl WebhookRequest {
    /// The raw query text, if the platform sent one.
    #[must_use]
    pub fn query_text(&self) -> Option<&str> {
        self.query_result.as_ref()?.query_text.as_deref()
    }
}

/// Outbound fulfillment response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub fulfillment_text: String,
}

impl WebhookResponse {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }

    #[must_use]
    pub fn not_understood() -> Self {
        Self::new(NOT_UNDERSTOOD_TEXT)
    }

    #[must_use]
    pub fn apology() -> Self {
        Self::new(APOLOGY_TEXT)
    }
}
