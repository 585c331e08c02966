//! High-level RAG facade: build an in-memory index over a text corpus and
//! retrieve top-K context for a query.
//!
//! - [`splitter`]: recursive character splitting with overlap
//! - [`embed`]: embedding provider abstraction (+ LLM-service adapter)
//! - [`index`]: flat in-memory vector index
//! - [`retrieve`]: query embedding + search

mod config;
pub mod embed;
mod errors;
pub mod index;
mod record;
mod retrieve;
pub mod splitter;

pub use config::{DistanceKind, RagConfig};
pub use embed::{EmbedFuture, EmbeddingsProvider, llm_embedder::LlmEmbedder};
pub use errors::RagError;
pub use index::VectorIndex;
pub use record::{Chunk, RagHit, RagQuery};
pub use splitter::RecursiveSplitter;

use futures::future::try_join_all;
use tracing::{debug, info};

/// Read-only index over one corpus, built once at startup.
pub struct RagStore {
    cfg: RagConfig,
    index: VectorIndex,
}

impl RagStore {
    /// Splits `corpus`, embeds every chunk and fills the index.
    ///
    /// Chunks are embedded concurrently; vectors keep chunk order.
    ///
    /// # Errors
    /// - `RagError::Config` for an invalid config
    /// - `RagError::EmptyCorpus` when splitting yields nothing
    /// - any embedding or dimension error
    pub async fn build(
        corpus: &str,
        cfg: RagConfig,
        provider: &dyn EmbeddingsProvider,
    ) -> Result<Self, RagError> {
        cfg.validate()?;
        let splitter = RecursiveSplitter::new(cfg.chunk_size, cfg.chunk_overlap)?;
        let chunks = splitter.split(corpus);
        if chunks.is_empty() {
            return Err(RagError::EmptyCorpus);
        }
        debug!(chunks = chunks.len(), "RagStore::build embedding chunks");

        let vectors = try_join_all(chunks.iter().map(|c| provider.embed(&c.text))).await?;

        let mut index = VectorIndex::new(cfg.distance);
        for (chunk, vector) in chunks.into_iter().zip(vectors) {
            index.insert(chunk, vector)?;
        }

        info!(
            chunks = index.len(),
            dim = ?index.dim(),
            chunk_size = cfg.chunk_size,
            chunk_overlap = cfg.chunk_overlap,
            "vector index built"
        );
        Ok(Self { cfg, index })
    }

    /// Embeds the query text and returns the most similar chunks.
    ///
    /// # Errors
    /// Returns embedding/provider errors or a dimension mismatch.
    pub async fn rag_context(
        &self,
        query: RagQuery<'_>,
        provider: &dyn EmbeddingsProvider,
    ) -> Result<Vec<RagHit>, RagError> {
        retrieve::rag_context(&self.index, query, provider).await
    }

    pub fn config(&self) -> &RagConfig {
        &self.cfg
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }
}
