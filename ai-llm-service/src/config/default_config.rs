//! Default LLM configs loaded from environment variables.
//!
//! Two roles are produced from one provider selection:
//!
//! - **Chat**      → answers questions (generation)
//! - **Embedding** → vectors for retrieval
//!
//! # Environment variables
//!
//! - `LLM_PROVIDER`        = `gemini` (default) or `openai`
//! - `GOOGLE_API_KEY`      = Gemini credential
//! - `OPENAI_API_KEY`      = OpenAI credential
//! - `LLM_CHAT_MODEL`      = chat model override
//! - `LLM_EMBEDDING_MODEL` = embedding model override
//! - `LLM_ENDPOINT`        = base URL override
//! - `LLM_TEMPERATURE`     = sampling temperature (default `0.3`)
//! - `LLM_MAX_TOKENS`      = optional max output tokens (u32)
//! - `LLM_TIMEOUT_SECS`    = optional request timeout (u64)
//!
//! A missing credential is **not** an error here: it is logged and surfaces
//! later as `MissingApiKey` when a model is actually called.

use tracing::{error, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        Result, env_opt_f32, env_opt_string, env_opt_u32, env_opt_u64, validate_http_endpoint,
        validate_range_f32,
    },
};

/// Sampling temperature used when `LLM_TEMPERATURE` is unset.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Built-in model ids and base URL for a provider.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDefaults {
    pub chat_model: &'static str,
    pub embedding_model: &'static str,
    pub endpoint: &'static str,
}

/// Returns the built-in defaults for `provider`.
pub fn provider_defaults(provider: LlmProvider) -> ProviderDefaults {
    match provider {
        LlmProvider::Gemini => ProviderDefaults {
            chat_model: "gemini-1.5-pro",
            embedding_model: "models/embedding-001",
            endpoint: "https://generativelanguage.googleapis.com",
        },
        LlmProvider::OpenAI => ProviderDefaults {
            chat_model: "gpt-4o-mini",
            embedding_model: "text-embedding-3-small",
            endpoint: "https://api.openai.com",
        },
    }
}

/// Raw LLM settings as read from the environment.
#[derive(Debug, Clone, Default)]
pub struct LlmEnv {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub chat_model: Option<String>,
    pub embedding_model: Option<String>,
    pub endpoint: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl LlmEnv {
    /// Reads all LLM variables from the process environment.
    ///
    /// # Errors
    /// - `UnsupportedProvider` for an unknown `LLM_PROVIDER`
    /// - `InvalidNumber` for malformed numeric variables
    pub fn from_env() -> Result<Self> {
        let provider = match env_opt_string("LLM_PROVIDER") {
            Some(raw) => raw.parse::<LlmProvider>()?,
            None => LlmProvider::default(),
        };

        let api_key = env_opt_string(provider.api_key_var());
        if api_key.is_none() {
            error!(
                %provider,
                var = provider.api_key_var(),
                "API key not found; model calls will fail until it is configured"
            );
        }

        Ok(Self {
            provider,
            api_key,
            chat_model: env_opt_string("LLM_CHAT_MODEL"),
            embedding_model: env_opt_string("LLM_EMBEDDING_MODEL"),
            endpoint: env_opt_string("LLM_ENDPOINT"),
            temperature: env_opt_f32("LLM_TEMPERATURE")?,
            max_tokens: env_opt_u32("LLM_MAX_TOKENS")?,
            timeout_secs: env_opt_u64("LLM_TIMEOUT_SECS")?,
        })
    }

    fn endpoint(&self) -> Result<String> {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| provider_defaults(self.provider).endpoint.to_string());
        validate_http_endpoint("LLM_ENDPOINT", &endpoint)?;
        Ok(endpoint)
    }

    /// Config for the **chat** profile.
    ///
    /// # Defaults
    /// - `temperature = Some(0.3)`
    /// - `timeout_secs = None` (HTTP client default)
    ///
    /// # Errors
    /// `OutOfRange` for a temperature outside `0.0..=2.0`, `InvalidFormat`
    /// for a non-HTTP endpoint.
    pub fn chat_config(&self) -> Result<LlmModelConfig> {
        let temperature = self.temperature.unwrap_or(DEFAULT_TEMPERATURE);
        validate_range_f32("temperature", temperature, 0.0, 2.0)?;

        let cfg = LlmModelConfig {
            provider: self.provider,
            model: self
                .chat_model
                .clone()
                .unwrap_or_else(|| provider_defaults(self.provider).chat_model.to_string()),
            endpoint: self.endpoint()?,
            api_key: self.api_key.clone(),
            max_tokens: self.max_tokens,
            temperature: Some(temperature),
            top_p: None,
            timeout_secs: self.timeout_secs,
        };
        info!(provider = %cfg.provider, model = %cfg.model, "chat profile configured");
        Ok(cfg)
    }

    /// Config for the **embedding** profile (same provider and key as chat).
    pub fn embedding_config(&self) -> Result<LlmModelConfig> {
        let cfg = LlmModelConfig {
            provider: self.provider,
            model: self
                .embedding_model
                .clone()
                .unwrap_or_else(|| provider_defaults(self.provider).embedding_model.to_string()),
            endpoint: self.endpoint()?,
            api_key: self.api_key.clone(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: self.timeout_secs,
        };
        info!(provider = %cfg.provider, model = %cfg.model, "embedding profile configured");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::{AiLlmError, ConfigError};

    #[test]
    fn gemini_defaults_are_applied() {
        let env = LlmEnv::default();
        let chat = env.chat_config().unwrap();
        assert_eq!(chat.provider, LlmProvider::Gemini);
        assert_eq!(chat.model, "gemini-1.5-pro");
        assert_eq!(chat.temperature, Some(0.3));
        assert_eq!(chat.timeout_secs, None);
        assert!(!chat.has_api_key());

        let emb = env.embedding_config().unwrap();
        assert_eq!(emb.model, "models/embedding-001");
        assert_eq!(emb.endpoint, "https://generativelanguage.googleapis.com");
    }

    #[test]
    fn overrides_win_over_defaults() {
        let env = LlmEnv {
            provider: LlmProvider::OpenAI,
            api_key: Some("sk-test".into()),
            chat_model: Some("gpt-4o".into()),
            endpoint: Some("http://localhost:8080".into()),
            temperature: Some(0.0),
            max_tokens: Some(256),
            ..LlmEnv::default()
        };
        let chat = env.chat_config().unwrap();
        assert_eq!(chat.model, "gpt-4o");
        assert_eq!(chat.endpoint, "http://localhost:8080");
        assert_eq!(chat.max_tokens, Some(256));
        assert!(chat.has_api_key());

        let emb = env.embedding_config().unwrap();
        assert_eq!(emb.model, "text-embedding-3-small");
    }

    #[test]
    fn rejects_bad_temperature_and_endpoint() {
        let hot = LlmEnv {
            temperature: Some(3.0),
            ..LlmEnv::default()
        };
        assert!(matches!(
            hot.chat_config(),
            Err(AiLlmError::Config(ConfigError::OutOfRange { .. }))
        ));

        let bad = LlmEnv {
            endpoint: Some("ftp://example".into()),
            ..LlmEnv::default()
        };
        assert!(matches!(
            bad.embedding_config(),
            Err(AiLlmError::Config(ConfigError::InvalidFormat { .. }))
        ));
    }
}
