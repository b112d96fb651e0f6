//! Metrics recording implementation using Prometheus.

use prometheus::{
    register_counter_vec_with_registry, register_histogram_vec_with_registry, CounterVec, Encoder,
    HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records a completed HTTP request with its outcome.
    fn record_http_request(&self, method: &str, path: &str, status_code: &str);

    /// Records the duration of a completed HTTP request.
    fn record_http_duration(&self, method: &str, path: &str, status_code: &str, duration_secs: f64);
}

/// Prometheus metrics collector.
///
/// Every family carries a constant `service` label so scrapes from several
/// processes can be told apart downstream.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    http_requests_total: CounterVec,
    http_request_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Creates a new metrics instance with a Prometheus registry.
    pub fn new(service_name: &str) -> Self {
        let registry = Arc::new(Registry::new());

        let http_requests_total = register_counter_vec_with_registry!(
            Opts::new(
                "http_requests_total",
                "Total number of HTTP requests handled"
            )
            .const_label("service", service_name),
            &["method", "path", "status_code"],
            registry.clone()
        )
        .expect("Failed to register http_requests_total");

        let http_request_duration_seconds = register_histogram_vec_with_registry!(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds"
            )
            .const_label("service", service_name)
            .buckets(vec![
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0
            ]),
            &["method", "path", "status_code"],
            registry.clone()
        )
        .expect("Failed to register http_request_duration_seconds");

        Metrics {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        }
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .expect("Failed to encode metrics");
        String::from_utf8(buffer).expect("Metrics encoding produced invalid UTF-8")
    }
}

impl MetricsRecorder for Metrics {
    fn record_http_request(&self, method: &str, path: &str, status_code: &str) {
        self.http_requests_total
            .with_label_values(&[method, path, status_code])
            .inc();
    }

    fn record_http_duration(
        &self,
        method: &str,
        path: &str,
        status_code: &str,
        duration_secs: f64,
    ) {
        self.http_request_duration_seconds
            .with_label_values(&[method, path, status_code])
            .observe(duration_secs);
    }
}
