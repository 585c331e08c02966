//! Chat model seam: the shared LLM service in production, stubs in tests.

use std::{future::Future, pin::Pin};

use ai_llm_service::LlmServiceProfiles;

use crate::error::ContextorError;

/// Boxed future returned by [`ChatModel::complete`].
pub type ChatFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ContextorError>> + Send + 'a>>;

/// Single-turn, non-streaming text completion.
pub trait ChatModel: Send + Sync {
    fn complete<'a>(&'a self, prompt: &'a str) -> ChatFuture<'a>;
}

impl ChatModel for LlmServiceProfiles {
    fn complete<'a>(&'a self, prompt: &'a str) -> ChatFuture<'a> {
        Box::pin(async move { Ok(self.generate(prompt, None).await?) })
    }
}
