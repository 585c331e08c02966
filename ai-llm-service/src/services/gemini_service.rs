//! Google Gemini service for text generation and embeddings.
//!
//! Minimal, non-streaming client around the Generative Language REST API.
//! Endpoints are derived from `LlmModelConfig::endpoint`:
//! - POST {endpoint}/v1beta/models/{model}:generateContent - generation
//! - POST {endpoint}/v1beta/models/{model}:embedContent    - embeddings
//!
//! Constructor validation:
//! - `cfg.provider` must be `LlmProvider::Gemini`
//! - `cfg.api_key` must be present
//! - `cfg.endpoint` must start with http:// or https://

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, HttpError, ProviderError, ProviderErrorKind, make_snippet},
};

/// Thin client for the Gemini API.
///
/// High-level operations:
/// - [`GeminiService::generate`]   - single, non-streaming generation
/// - [`GeminiService::embeddings`] - single embeddings vector retrieval
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_generate: String,
    url_embed: String,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - `InvalidProvider` if `cfg.provider` is not Gemini
    /// - `MissingApiKey` if `cfg.api_key` is `None` or blank
    /// - `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        if cfg.provider != LlmProvider::Gemini {
            return Err(fail(ProviderErrorKind::InvalidProvider));
        }

        let api_key = match cfg.api_key.as_deref() {
            Some(k) if !k.trim().is_empty() => k.trim().to_string(),
            _ => return Err(fail(ProviderErrorKind::MissingApiKey)),
        };

        let endpoint = cfg.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(fail(ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone())));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            header::HeaderValue::from_str(&api_key).map_err(|e| {
                fail(ProviderErrorKind::Decode(format!(
                    "invalid API key header: {e}"
                )))
            })?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let base = endpoint.trim_end_matches('/');
        let model_path = model_path(&cfg.model);
        let url_generate = format!("{base}/v1beta/{model_path}:generateContent");
        let url_embed = format!("{base}/v1beta/{model_path}:embedContent");

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_generate,
            url_embed,
        })
    }

    /// Performs a **non-streaming** `generateContent` request.
    ///
    /// # Errors
    /// - `HttpStatus` for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] for client/network failures
    /// - `Decode` if the JSON cannot be parsed
    /// - `EmptyChoices` if no candidate carries text
    pub async fn generate(&self, prompt: &str, system: Option<&str>) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = GenerateRequest::from_cfg(&self.cfg, prompt, system);

        debug!(
            model = %self.cfg.model,
            prompt_len = prompt.len(),
            has_system = system.is_some(),
            "POST {}", self.url_generate
        );

        let resp = self.client.post(&self.url_generate).json(&body).send().await?;
        let resp = self.ensure_success(resp, &self.url_generate, started).await?;

        let out: GenerateResponse = resp.json().await.map_err(|e| {
            error!(error = %e, model = %self.cfg.model, "failed to decode generateContent response");
            fail(ProviderErrorKind::Decode(format!(
                "serde error: {e}; expected `candidates[0].content.parts[].text`"
            )))
        })?;

        let text = out.first_text().ok_or_else(|| fail(ProviderErrorKind::EmptyChoices))?;

        info!(
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "generation completed"
        );

        Ok(text)
    }

    /// Retrieves a single embeddings vector via `embedContent`.
    ///
    /// # Errors
    /// Same categories as [`GeminiService::generate`]; an empty vector is a
    /// `Decode` error.
    pub async fn embeddings(&self, input: &str) -> Result<Vec<f32>, AiLlmError> {
        let started = Instant::now();
        let model = model_path(&self.cfg.model);
        let body = EmbedRequest {
            model: &model,
            content: Content {
                role: None,
                parts: vec![Part { text: input }],
            },
        };

        debug!(
            model = %self.cfg.model,
            input_len = input.len(),
            "POST {}", self.url_embed
        );

        let resp = self.client.post(&self.url_embed).json(&body).send().await?;
        let resp = self.ensure_success(resp, &self.url_embed, started).await?;

        let out: EmbedResponse = resp.json().await.map_err(|e| {
            error!(error = %e, model = %self.cfg.model, "failed to decode embedContent response");
            fail(ProviderErrorKind::Decode(format!(
                "serde error: {e}; expected `embedding.values`"
            )))
        })?;

        if out.embedding.values.is_empty() {
            return Err(fail(ProviderErrorKind::Decode(
                "empty `embedding.values` in response".into(),
            )));
        }

        debug!(
            model = %self.cfg.model,
            dim = out.embedding.values.len(),
            latency_ms = started.elapsed().as_millis() as u64,
            "embedding completed"
        );

        Ok(out.embedding.values)
    }

    async fn ensure_success(
        &self,
        resp: reqwest::Response,
        url: &str,
        started: Instant,
    ) -> Result<reqwest::Response, AiLlmError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let snippet = make_snippet(&resp.text().await.unwrap_or_default());

        error!(
            %status,
            %url,
            %snippet,
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "Gemini returned non-success status"
        );

        Err(fail(ProviderErrorKind::HttpStatus(HttpError {
            status,
            url: url.to_string(),
            snippet,
        })))
    }
}

fn fail(kind: ProviderErrorKind) -> AiLlmError {
    ProviderError::new(LlmProvider::Gemini, kind).into()
}

/// Gemini addresses models as `models/{id}`; accept both spellings.
fn model_path(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    generation_config: GenerationConfig,
}

impl<'a> GenerateRequest<'a> {
    fn from_cfg(cfg: &LlmModelConfig, prompt: &'a str, system: Option<&'a str>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: system.map(|s| Content {
                role: None,
                parts: vec![Part { text: s }],
            }),
            generation_config: GenerationConfig {
                temperature: cfg.temperature,
                top_p: cfg.top_p,
                max_output_tokens: cfg.max_tokens,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate that has any.
    fn first_text(self) -> Option<String> {
        self.candidates.into_iter().find_map(|c| {
            let text: String = c
                .content?
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect();
            (!text.trim().is_empty()).then_some(text)
        })
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    content: Content<'a>,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}
