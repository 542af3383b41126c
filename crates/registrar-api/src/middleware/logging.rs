//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{extract::Request, middleware::Next, response::Response};

const SLOW_REQUEST: Duration = Duration::from_millis(100);

/// Log method, path, status and latency for every request
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    tracing::debug!(%method, %path, "request received");

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    let latency_ms = elapsed.as_millis() as u64;

    if elapsed > SLOW_REQUEST {
        tracing::warn!(%method, %path, status, latency_ms, "slow request");
    } else if response.status().is_server_error() {
        tracing::error!(%method, %path, status, latency_ms, "request failed");
    } else {
        tracing::info!(%method, %path, status, latency_ms, "request completed");
    }

    response
}
