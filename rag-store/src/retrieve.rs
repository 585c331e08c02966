//! Retrieval: embed the query and search the index.

use tracing::trace;

use crate::{
    embed::EmbeddingsProvider,
    errors::RagError,
    index::VectorIndex,
    record::{RagHit, RagQuery},
};

/// Embeds the query text and returns the `top_k` most similar chunks.
///
/// # Errors
/// Returns embedding/provider errors or a dimension mismatch.
pub async fn rag_context(
    index: &VectorIndex,
    query: RagQuery<'_>,
    provider: &dyn EmbeddingsProvider,
) -> Result<Vec<RagHit>, RagError> {
    trace!("retrieve::rag_context top_k={}", query.top_k);

    if query.top_k == 0 || index.is_empty() {
        return Ok(Vec::new());
    }

    let qv = provider.embed(query.text).await?;
    let hits = index.search(&qv, query.top_k)?;

    trace!("retrieve::rag_context hits={}", hits.len());
    Ok(hits)
}
