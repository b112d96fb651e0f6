//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration and the metrics collector.

use crate::config::ConfigV1;
use crate::metrics::Metrics;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// This state is cloned for each request handler and contains
/// references to the configuration and the Prometheus collector.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Collector shared by the metrics layer and the exposition endpoint.
    pub metrics: Metrics,
}
