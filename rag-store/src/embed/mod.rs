use std::{future::Future, pin::Pin};

use crate::errors::RagError;

/// Boxed future returned by [`EmbeddingsProvider::embed`].
pub type EmbedFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<f32>, RagError>> + Send + 'a>>;

/// Asynchronous embedding provider.
///
/// Implement this trait to plug in an embedding backend. The hosted
/// providers go through [`llm_embedder::LlmEmbedder`]; tests use
/// deterministic local stubs.
pub trait EmbeddingsProvider: Send + Sync {
    fn embed<'a>(&'a self, text: &'a str) -> EmbedFuture<'a>;
}

pub mod llm_embedder;
