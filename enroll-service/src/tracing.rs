use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use uuid::Uuid;

/// Span for one HTTP request, tagged with a generated request id so all
/// events inside the request correlate.
pub fn make_span_with_request_id(request: &Request<Body>) -> ::tracing::Span {
    let request_id = Uuid::new_v4();
    ::tracing::info_span!(
        "request",
        id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &::tracing::Span) {
    ::tracing::info!("started processing request");
}

pub fn on_response(response: &Response, latency: Duration, _span: &::tracing::Span) {
    ::tracing::info!(
        status = %response.status(),
        latency_ms = %latency.as_millis(),
        "finished processing request"
    );
}
