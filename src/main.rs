use std::{error::Error, sync::Arc};

use ai_llm_service::{LlmServiceProfiles, config::default_config::LlmEnv, telemetry};
use api::core::{api_config::ApiConfig, app_state::AppState};
use contextor::{ChatModel, ContextorConfig, prepare_answerer};
use rag_store::{EmbeddingsProvider, LlmEmbedder};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; variables may come from the process environment.
    let dotenv = dotenvy::dotenv();

    telemetry::init("info", telemetry::llm_level_from_env())?;

    if let Err(e) = dotenv {
        warn!(error = %e, "no .env loaded, using process environment");
    }

    let llm_env = LlmEnv::from_env()?;
    let llm = Arc::new(LlmServiceProfiles::new(
        llm_env.chat_config()?,
        llm_env.embedding_config()?,
    ));

    let contextor_cfg = ContextorConfig::from_env()?;
    let api_cfg = ApiConfig::from_env()?;

    info!(
        provider = %llm_env.provider,
        strategy = %contextor_cfg.strategy,
        "starting HR assistant"
    );

    let chat: Arc<dyn ChatModel> = llm.clone();
    let embedder: Arc<dyn EmbeddingsProvider> = Arc::new(LlmEmbedder::new(llm));
    let answerer = prepare_answerer(&contextor_cfg, chat, embedder).await;

    api::start(&api_cfg, Arc::new(AppState::new(answerer))).await?;

    Ok(())
}
