use axum::{extract::Request, middleware::Next, response::Response};
use log::info;
use std::time::Instant;

/// Access log: one line per request once the response is ready
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{method} {uri} {} {}ms",
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    response
}
