use std::{fmt, str::FromStr};

use crate::error_handler::ConfigError;

/// Represents the hosted provider used for chat completions and embeddings.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmProvider;
///
/// let provider: LlmProvider = "gemini".parse().unwrap();
/// assert_eq!(provider, LlmProvider::Gemini);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LlmProvider {
    /// Google Gemini (Generative Language API).
    #[default]
    Gemini,
    /// OpenAI REST API.
    OpenAI,
}

impl LlmProvider {
    /// Name of the environment variable holding this provider's API key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::Gemini => "GOOGLE_API_KEY",
            LlmProvider::OpenAI => "OPENAI_API_KEY",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(LlmProvider::Gemini),
            "openai" | "chatgpt" => Ok(LlmProvider::OpenAI),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProvider::Gemini => f.write_str("Gemini"),
            LlmProvider::OpenAI => f.write_str("OpenAI"),
        }
    }
}
