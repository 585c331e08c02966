use std::sync::Arc;

use contextor::Answerer;

/// Shared state for all HTTP handlers.
///
/// Built once at startup and handed to the router as `Arc<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Active answer strategy (or the unavailable stand-in after a failed
    /// index build).
    pub answerer: Arc<dyn Answerer>,
}

impl AppState {
    pub fn new(answerer: Arc<dyn Answerer>) -> Self {
        Self { answerer }
    }
}
