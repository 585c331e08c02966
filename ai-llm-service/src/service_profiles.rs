//! Shared LLM service with two profiles: `chat` and `embedding`.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Provider clients are created lazily on first use and cached per config,
//!   so a missing API key fails the call, not the process start.
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//! use ai_llm_service::{LlmServiceProfiles, config::default_config::LlmEnv};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), ai_llm_service::AiLlmError> {
//! let env = LlmEnv::from_env()?;
//! let svc = Arc::new(LlmServiceProfiles::new(env.chat_config()?, env.embedding_config()?));
//!
//! let txt = svc.generate("How many sick leave days?", None).await?;
//! let emb = svc.embed("Casual Leave").await?;
//! println!("{txt} / dim = {}", emb.len());
//! # Ok(()) }
//! ```

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::AiLlmError,
    services::{gemini_service::GeminiService, open_ai_service::OpenAiService},
};

/// Chat + embedding profiles with cached provider clients.
pub struct LlmServiceProfiles {
    chat: LlmModelConfig,
    embedding: LlmModelConfig,

    gemini: RwLock<HashMap<ClientKey, Arc<GeminiService>>>,
    openai: RwLock<HashMap<ClientKey, Arc<OpenAiService>>>,
}

impl LlmServiceProfiles {
    pub fn new(chat: LlmModelConfig, embedding: LlmModelConfig) -> Self {
        Self {
            chat,
            embedding,
            gemini: RwLock::new(HashMap::new()),
            openai: RwLock::new(HashMap::new()),
        }
    }

    /// Generates text using the **chat** profile.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if the client cannot be built (e.g. missing key)
    /// or the call fails.
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        match self.chat.provider {
            LlmProvider::Gemini => {
                let cli = self.get_or_init_gemini(&self.chat).await?;
                cli.generate(prompt, system).await
            }
            LlmProvider::OpenAI => {
                let cli = self.get_or_init_openai(&self.chat).await?;
                cli.generate(prompt, system).await
            }
        }
    }

    /// Computes embeddings using the **embedding** profile.
    pub async fn embed(&self, input: &str) -> Result<Vec<f32>, AiLlmError> {
        match self.embedding.provider {
            LlmProvider::Gemini => {
                let cli = self.get_or_init_gemini(&self.embedding).await?;
                cli.embeddings(input).await
            }
            LlmProvider::OpenAI => {
                let cli = self.get_or_init_openai(&self.embedding).await?;
                cli.embeddings(input).await
            }
        }
    }

    /* --------------------- Internals --------------------- */

    async fn get_or_init_gemini(
        &self,
        cfg: &LlmModelConfig,
    ) -> Result<Arc<GeminiService>, AiLlmError> {
        let key = ClientKey::from(cfg);
        if let Some(cli) = self.gemini.read().await.get(&key).cloned() {
            return Ok(cli);
        }
        let mut w = self.gemini.write().await;
        if let Some(cli) = w.get(&key).cloned() {
            return Ok(cli);
        }
        let cli = Arc::new(GeminiService::new(cfg.clone())?);
        w.insert(key, cli.clone());
        Ok(cli)
    }

    async fn get_or_init_openai(
        &self,
        cfg: &LlmModelConfig,
    ) -> Result<Arc<OpenAiService>, AiLlmError> {
        let key = ClientKey::from(cfg);
        if let Some(cli) = self.openai.read().await.get(&key).cloned() {
            return Ok(cli);
        }
        let mut w = self.openai.write().await;
        if let Some(cli) = w.get(&key).cloned() {
            return Ok(cli);
        }
        let cli = Arc::new(OpenAiService::new(cfg.clone())?);
        w.insert(key, cli.clone());
        Ok(cli)
    }
}

/// Internal cache key identifying a unique client config.
#[derive(Clone, PartialEq, Eq, Hash)]
struct ClientKey {
    provider: LlmProvider,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    max_tokens: Option<u32>,
    temperature_bits: Option<u32>,
    top_p_bits: Option<u32>,
    timeout: Option<u64>,
}

impl From<&LlmModelConfig> for ClientKey {
    fn from(cfg: &LlmModelConfig) -> Self {
        Self {
            provider: cfg.provider,
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            api_key: cfg.api_key.clone(),
            max_tokens: cfg.max_tokens,
            temperature_bits: cfg.temperature.map(f32::to_bits),
            top_p_bits: cfg.top_p.map(f32::to_bits),
            timeout: cfg.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handler::{ProviderError, ProviderErrorKind};

    fn cfg(model: &str, api_key: Option<&str>) -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Gemini,
            model: model.into(),
            endpoint: "http://127.0.0.1:9".into(),
            api_key: api_key.map(str::to_string),
            max_tokens: None,
            temperature: Some(0.3),
            top_p: None,
            timeout_secs: Some(1),
        }
    }

    #[tokio::test]
    async fn missing_key_surfaces_on_call_not_on_construction() {
        let svc = LlmServiceProfiles::new(
            cfg("gemini-1.5-pro", None),
            cfg("models/embedding-001", None),
        );

        let err = svc.generate("hello", None).await.unwrap_err();
        assert!(matches!(
            err,
            AiLlmError::Provider(ProviderError {
                provider: LlmProvider::Gemini,
                kind: ProviderErrorKind::MissingApiKey,
            })
        ));
        assert!(svc.embed("hello").await.is_err());
        assert!(svc.gemini.read().await.is_empty());
    }

    #[tokio::test]
    async fn clients_are_cached_per_profile() {
        let svc = LlmServiceProfiles::new(
            cfg("gemini-1.5-pro", Some("k")),
            cfg("models/embedding-001", Some("k")),
        );
        let a = svc.get_or_init_gemini(&svc.chat).await.unwrap();
        let b = svc.get_or_init_gemini(&svc.chat).await.unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        svc.get_or_init_gemini(&svc.embedding).await.unwrap();
        assert_eq!(svc.gemini.read().await.len(), 2);
    }

    #[test]
    fn cache_key_tracks_sampling_options() {
        let a = cfg("m", Some("k"));
        let mut b = a.clone();
        b.temperature = Some(0.9);
        assert!(ClientKey::from(&a) != ClientKey::from(&b));
        assert!(ClientKey::from(&a) == ClientKey::from(&a.clone()));
    }
}
