//! Shared LLM access for the HR assistant.
//!
//! - [`config`]: provider kinds, model configs and env-driven defaults
//! - [`services`]: thin REST clients (Gemini, OpenAI)
//! - [`service_profiles`]: `chat` + `embedding` profiles with cached clients
//! - [`error_handler`]: unified [`AiLlmError`]
//! - [`telemetry`]: tracing subscriber setup shared by the binary

pub mod config;
pub mod error_handler;
pub mod service_profiles;
pub mod services;
pub mod telemetry;

pub use config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
pub use error_handler::AiLlmError;
pub use service_profiles::LlmServiceProfiles;
