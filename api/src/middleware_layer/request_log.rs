use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// One log line per request: method, path, status and latency.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let res = next.run(req).await;

    let status = res.status();
    let latency_ms = started.elapsed().as_millis() as u64;
    if status.is_success() {
        info!(%method, %path, status = status.as_u16(), latency_ms, "request served");
    } else {
        warn!(%method, %path, status = status.as_u16(), latency_ms, "request failed");
    }

    res
}
