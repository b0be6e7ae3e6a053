//! # herald-genai
//!
//! Text generation for Herald's fallback and rephrase paths.
//!
//! The service treats the model as an opaque completion endpoint: submit a
//! prompt, get text or an error. [`TextGenerator`] is that contract;
//! [`GeminiClient`] implements it over the Gemini `generateContent` REST API.

pub mod gemini;
pub mod prompt;

mod error;
mod http;

pub use error::GenAiError;
pub use gemini::GeminiClient;
pub use prompt::{answer_prompt, rephrase_prompt};

/// Submit a prompt, receive generated text.
///
/// Implementations return the model's text trimmed, and treat empty output as
/// [`GenAiError::EmptyResponse`].
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] on transport failure, non-success status,
    /// timeout, safety block, or empty output.
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError>;
}
