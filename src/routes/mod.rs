//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! the static greeting routes and the metrics exposition endpoint.

mod greeting_routes;
mod metrics_routes;

use crate::metrics;
use crate::state::AppState;
use axum::{middleware, Router};

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router and attaches the
/// application state for access in handlers. The metrics layer wraps the
/// greeting routes only; the exposition endpoint is merged after the
/// layer so scrapes do not observe themselves.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(greeting_routes::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_http,
        ))
        .merge(metrics_routes::routes(&state.config.metrics.path))
        .with_state(state)
}
