pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use std::{future::Future, sync::Arc};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use crate::{
    core::{api_config::ApiConfig, app_state::AppState},
    error_handler::{AppError, AppResult},
    middleware_layer::request_log::log_requests,
    routes::{ask::ask_route::ask, home_route::home},
};

/// Routes: `GET /` chat page, `POST /ask` question answering.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/ask", post(ask))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Binds `cfg.address` and serves until Ctrl+C.
///
/// # Errors
/// `AppError::Bind` if the address is unavailable, `AppError::Server` if the
/// accept loop fails.
pub async fn start(cfg: &ApiConfig, state: Arc<AppState>) -> AppResult<()> {
    let listener = TcpListener::bind(&cfg.address)
        .await
        .map_err(|source| AppError::Bind {
            addr: cfg.address.clone(),
            source,
        })?;

    info!(
        address = %cfg.address,
        strategy = %state.answerer.kind(),
        "HR assistant listening"
    );

    serve(listener, state, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed. If the handler cannot be installed the
/// server keeps running until killed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contextor::{StrategyKind, UnavailableAnswerer};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpStream,
        sync::oneshot,
    };

    async fn roundtrip(addr: std::net::SocketAddr, raw: String) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(raw.as_bytes()).await.unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).await.unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn post_ask(body: &str) -> String {
        format!(
            "POST /ask HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    #[tokio::test]
    async fn degraded_server_still_serves_page_and_replies() {
        let state = Arc::new(AppState::new(Arc::new(UnavailableAnswerer::new(
            StrategyKind::Retrieval,
            "embedding service unreachable",
        ))));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, state, async {
            let _ = stop_rx.await;
        }));

        let page = roundtrip(
            addr,
            "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n".to_string(),
        )
        .await;
        assert!(page.starts_with("HTTP/1.1 200"), "{page}");
        assert!(page.contains("text/html"));

        let res = roundtrip(addr, post_ask(r#"{"message":"How many sick days?"}"#)).await;
        assert!(res.starts_with("HTTP/1.1 200"), "{res}");
        assert!(res.contains(r#"{"response":"Sorry, I encountered an error processing your request."}"#));

        let res = roundtrip(addr, post_ask("{oops")).await;
        assert!(res.starts_with("HTTP/1.1 200"), "{res}");
        assert!(res.contains(r#"{"response":"Please type a question."}"#));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
