//! Unified error types for the crate.

use ai_llm_service::AiLlmError;
use thiserror::Error;

/// Top-level error for rag-store operations.
#[derive(Debug, Error)]
pub enum RagError {
    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Nothing left to index after splitting.
    #[error("corpus produced no chunks")]
    EmptyCorpus,

    /// Mismatch in vector dimensionality across records or queries.
    #[error("vector size mismatch: got {got}, want {want}")]
    VectorSizeMismatch { got: usize, want: usize },

    /// Provider returned a zero-length vector.
    #[error("embedding provider returned an empty vector")]
    EmptyEmbedding,

    /// Embedding call through the shared LLM service failed.
    #[error("embedding error: {0}")]
    Llm(#[from] AiLlmError),

    /// Failure reported by a custom [`crate::EmbeddingsProvider`].
    #[error("embedding provider error: {0}")]
    Provider(String),
}
