//! The "answer this question" capability and its strategies.

use std::{future::Future, pin::Pin, sync::Arc};

use rag_store::{EmbeddingsProvider, RagConfig, RagQuery, RagStore};
use tracing::debug;

use crate::{
    cfg::StrategyKind,
    error::ContextorError,
    llm::ChatModel,
    prompt::{build_full_policy_prompt, build_grounded_prompt},
};

/// Boxed future returned by [`Answerer::answer`].
pub type AnswerFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, ContextorError>> + Send + 'a>>;

/// Turns one question into one answer. Stateless across calls.
pub trait Answerer: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn answer<'a>(&'a self, question: &'a str) -> AnswerFuture<'a>;
}

/// Retrieval strategy: embed question, take top-k chunks, grounded prompt.
pub struct RetrievalAnswerer {
    store: RagStore,
    embedder: Arc<dyn EmbeddingsProvider>,
    chat: Arc<dyn ChatModel>,
}

impl RetrievalAnswerer {
    /// Builds the index over `corpus`.
    ///
    /// # Errors
    /// Any [`rag_store::RagError`] from splitting or embedding.
    pub async fn build(
        corpus: &str,
        rag: RagConfig,
        embedder: Arc<dyn EmbeddingsProvider>,
        chat: Arc<dyn ChatModel>,
    ) -> Result<Self, ContextorError> {
        let store = RagStore::build(corpus, rag, embedder.as_ref()).await?;
        Ok(Self {
            store,
            embedder,
            chat,
        })
    }

    pub fn store(&self) -> &RagStore {
        &self.store
    }
}

impl Answerer for RetrievalAnswerer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Retrieval
    }

    fn answer<'a>(&'a self, question: &'a str) -> AnswerFuture<'a> {
        Box::pin(async move {
            let query = RagQuery {
                text: question,
                top_k: self.store.config().top_k,
            };
            let hits = self.store.rag_context(query, self.embedder.as_ref()).await?;
            let prompt = build_grounded_prompt(question, &hits);

            debug!(
                hits = hits.len(),
                chunk_ids = ?hits.iter().map(|h| h.chunk_id).collect::<Vec<_>>(),
                prompt_len = prompt.len(),
                "retrieval prompt assembled"
            );

            self.chat.complete(&prompt).await
        })
    }
}

/// Full-policy strategy: the whole corpus goes into every prompt.
pub struct FullPolicyAnswerer {
    policy: String,
    chat: Arc<dyn ChatModel>,
}

impl FullPolicyAnswerer {
    pub fn new(policy: impl Into<String>, chat: Arc<dyn ChatModel>) -> Self {
        Self {
            policy: policy.into(),
            chat,
        }
    }
}

impl Answerer for FullPolicyAnswerer {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FullPolicy
    }

    fn answer<'a>(&'a self, question: &'a str) -> AnswerFuture<'a> {
        Box::pin(async move {
            let prompt = build_full_policy_prompt(question, &self.policy);
            debug!(prompt_len = prompt.len(), "full-policy prompt assembled");
            self.chat.complete(&prompt).await
        })
    }
}

/// Stand-in installed when a strategy failed to initialize. Every question
/// fails with the original startup error until the process restarts.
pub struct UnavailableAnswerer {
    kind: StrategyKind,
    reason: String,
}

impl UnavailableAnswerer {
    pub fn new(kind: StrategyKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

impl Answerer for UnavailableAnswerer {
    fn kind(&self) -> StrategyKind {
        self.kind
    }

    fn answer<'a>(&'a self, _question: &'a str) -> AnswerFuture<'a> {
        Box::pin(async move { Err(ContextorError::Unavailable(self.reason.clone())) })
    }
}
