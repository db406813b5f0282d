//! HTTP request metrics.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, endpoint, status
//! - `http_request_duration_seconds` (histogram): latency by method, endpoint
//!
//! # Design Decisions
//! - The Prometheus recorder is an explicitly constructed instance owned
//!   by the server composition root and passed through `AppState`. Nothing
//!   installs a process-global recorder, so concurrent test servers stay
//!   isolated.
//! - `endpoint` labels use the matched route template, not the raw path.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusHandle, PrometheusRecorder};

/// Histogram buckets tuned for typical local-handler latencies.
const DURATION_BUCKETS: &[f64] = &[
    0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5,
];

/// Request counter and latency histogram backed by a private recorder.
pub struct HttpMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl HttpMetrics {
    /// Build the recorder and register metric descriptions.
    pub fn new() -> Result<Self, BuildError> {
        let recorder = metrics_exporter_prometheus::PrometheusBuilder::new()
            .set_buckets(DURATION_BUCKETS)?
            .build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            describe_counter!("http_requests_total", "Total number of HTTP requests");
            describe_histogram!(
                "http_request_duration_seconds",
                "HTTP request duration in seconds"
            );
        });

        Ok(Self { recorder, handle })
    }

    /// Record one completed request.
    pub fn record_request(&self, method: &str, endpoint: &str, status: u16, elapsed: Duration) {
        let method = method.to_string();
        let endpoint = endpoint.to_string();
        metrics::with_local_recorder(&self.recorder, || {
            counter!(
                "http_requests_total",
                "method" => method.clone(),
                "endpoint" => endpoint.clone(),
                "status" => status.to_string()
            )
            .increment(1);
            histogram!(
                "http_request_duration_seconds",
                "method" => method,
                "endpoint" => endpoint
            )
            .record(elapsed.as_secs_f64());
        });
    }

    /// Render the Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.handle.render()
    }
}
