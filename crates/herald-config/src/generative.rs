//! Generative-language (Gemini) configuration.

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

const fn default_word_limit() -> u32 {
    100
}

const fn default_timeout_secs() -> u64 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerativeConfig {
    /// API key. Checked lazily, on the first generation.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier (e.g., `gemini-1.5-flash`, `gemini-2.0-flash`).
    #[serde(default = "default_model")]
    pub model: String,

    /// REST root of the generative-language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Word budget stated in generation prompts.
    #[serde(default = "default_word_limit")]
    pub word_limit: u32,

    /// Upper bound on a single generation call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            word_limit: default_word_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerativeConfig {
    /// Check if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
