//! Typed error for the contextor crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextorError {
    /// Retrieval / index errors from rag-store.
    #[error("RAG error: {0}")]
    Rag(#[from] rag_store::RagError),

    /// Chat model errors from the shared LLM service.
    #[error("LLM error: {0}")]
    Llm(#[from] ai_llm_service::AiLlmError),

    /// Invalid strategy configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The answerer could not be initialized; carries the startup failure.
    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}
