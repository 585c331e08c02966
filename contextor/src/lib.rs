//! HR policy answering: policy corpus, prompts, and the two interchangeable
//! answer strategies behind [`Answerer`].
//!
//! Public entry point: [`prepare_answerer`]. It runs once at startup and
//! always yields an answerer. If the retrieval index cannot be built (e.g.
//! embedding service unreachable or no API key) the failure is logged and an
//! [`UnavailableAnswerer`] is installed so the web server keeps running.

mod answerer;
mod cfg;
mod error;
mod llm;
pub mod policy;
pub mod prompt;

pub use answerer::{
    AnswerFuture, Answerer, FullPolicyAnswerer, RetrievalAnswerer, UnavailableAnswerer,
};
pub use cfg::{ContextorConfig, StrategyKind};
pub use error::ContextorError;
pub use llm::{ChatFuture, ChatModel};
pub use prompt::FALLBACK_ANSWER;

use std::sync::Arc;

use rag_store::EmbeddingsProvider;
use tracing::{error, info};

/// Builds the configured strategy over the built-in HR policy.
pub async fn prepare_answerer(
    cfg: &ContextorConfig,
    chat: Arc<dyn ChatModel>,
    embedder: Arc<dyn EmbeddingsProvider>,
) -> Arc<dyn Answerer> {
    prepare_answerer_for(policy::policy_text(), cfg, chat, embedder).await
}

async fn prepare_answerer_for(
    corpus: &str,
    cfg: &ContextorConfig,
    chat: Arc<dyn ChatModel>,
    embedder: Arc<dyn EmbeddingsProvider>,
) -> Arc<dyn Answerer> {
    match cfg.strategy {
        StrategyKind::FullPolicy => {
            info!(policy_len = corpus.len(), "full-policy answerer ready");
            Arc::new(FullPolicyAnswerer::new(corpus, chat))
        }
        StrategyKind::Retrieval => {
            info!("initializing vector index");
            match RetrievalAnswerer::build(corpus, cfg.rag.clone(), embedder, chat).await {
                Ok(answerer) => {
                    info!(
                        chunks = answerer.store().index().len(),
                        top_k = cfg.rag.top_k,
                        "retrieval answerer ready"
                    );
                    Arc::new(answerer)
                }
                Err(e) => {
                    error!(
                        error = %e,
                        "failed to initialize retrieval index; /ask stays unavailable until restart"
                    );
                    Arc::new(UnavailableAnswerer::new(
                        StrategyKind::Retrieval,
                        e.to_string(),
                    ))
                }
            }
        }
    }
}
