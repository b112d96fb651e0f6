//! HTTP request metrics middleware.
//!
//! Wraps instrumented routes to record a count and a latency observation
//! against the shared Prometheus registry.

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    middleware::Next,
    response::Response,
};
use http::Request;
use std::time::Instant;

use crate::metrics::MetricsRecorder;
use crate::state::AppState;

/// Records `http_requests_total` and `http_request_duration_seconds` for
/// each request, labelled with method, matched path and status code.
///
/// The matched route template is preferred over the raw URI so that label
/// cardinality stays bounded; unmatched requests fall back to the raw path.
pub async fn track_http(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status_code = response.status().as_u16().to_string();
    state
        .metrics
        .record_http_request(&method, &path, &status_code);
    state
        .metrics
        .record_http_duration(&method, &path, &status_code, duration);

    response
}
