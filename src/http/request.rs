//! Request identification and accounting.
//!
//! # Responsibilities
//! - Assign every request an `x-request-id` (UUID v4) and echo it back
//! - Open a tracing span carrying method, URI and request ID
//! - Record request count and latency metrics
//!
//! # Design Decisions
//! - Request ID added as early as possible so every log line carries it
//! - An incoming `x-request-id` is kept rather than replaced

use std::time::Instant;

use axum::{
    extract::Request,
    http::HeaderName,
    middleware::Next,
    response::Response,
};
use tracing::Span;

use crate::observability::metrics;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Span for one request, tagged with its ID.
pub fn request_span(request: &Request) -> Span {
    let request_id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Middleware recording per-request metrics.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    metrics::record_request(&method, response.status().as_u16(), start);
    response
}
