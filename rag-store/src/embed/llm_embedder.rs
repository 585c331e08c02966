use std::sync::Arc;

use ai_llm_service::LlmServiceProfiles;

use crate::embed::{EmbedFuture, EmbeddingsProvider};

/// Embeddings via the `embedding` profile of the shared LLM service.
#[derive(Clone)]
pub struct LlmEmbedder {
    llm: Arc<LlmServiceProfiles>,
}

impl LlmEmbedder {
    pub fn new(llm: Arc<LlmServiceProfiles>) -> Self {
        Self { llm }
    }
}

impl EmbeddingsProvider for LlmEmbedder {
    fn embed<'a>(&'a self, text: &'a str) -> EmbedFuture<'a> {
        Box::pin(async move { Ok(self.llm.embed(text).await?) })
    }
}
