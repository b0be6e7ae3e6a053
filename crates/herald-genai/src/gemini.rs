//! Gemini `generateContent` client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{GenAiError, TextGenerator, http::check_response};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateResponse {
    /// Concatenated, trimmed text of the first candidate.
    fn into_text(self) -> Result<String, GenAiError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().map(|part| part.text).collect::<String>())
            .unwrap_or_default();
        let text = text.trim();

        if !text.is_empty() {
            return Ok(text.to_string());
        }
        match self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            Some(reason) => Err(GenAiError::Blocked(reason)),
            None => Err(GenAiError::EmptyResponse),
        }
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for one Gemini model.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a client for `model`.
    ///
    /// An empty `api_key` is accepted here; it fails on the first
    /// [`generate`](TextGenerator::generate) call instead.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, GenAiError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("herald/0.1")
                .build()?,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Point the client at another API root (proxies, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Bound each generation call.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.model)
        )
    }

    async fn send(&self, prompt: &str) -> Result<String, GenAiError> {
        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        };
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let data: GenerateResponse = check_response(resp).await?.json().await?;
        data.into_text()
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        if self.api_key.trim().is_empty() {
            return Err(GenAiError::MissingApiKey);
        }

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "generating text");
        tokio::time::timeout(self.timeout, self.send(prompt))
            .await
            .map_err(|_| GenAiError::Timeout {
                timeout: self.timeout,
            })?
    }
}
