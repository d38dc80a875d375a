use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Logs method, path, status and latency of every request
///
/// Responses with a 4xx or 5xx status are logged at `error`, everything else at `info`.
/// Apply with `axum::middleware::from_fn(log_request)`.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_client_error() || status.is_server_error() {
        tracing::error!("{} {} {} {} ms", method, path, status.as_u16(), elapsed_ms);
    } else {
        tracing::info!("{} {} {} {} ms", method, path, status.as_u16(), elapsed_ms);
    }

    response
}
