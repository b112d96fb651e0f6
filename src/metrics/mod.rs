//! Metrics collection and exposition for Prometheus.
//!
//! This module provides centralized metrics recording, plus the router
//! layer that observes every HTTP request.

mod middleware;
mod recorder;

pub use middleware::track_http;
pub use recorder::{Metrics, MetricsRecorder};
