//! Metrics collection and exposition.
//!
//! # Metrics
//! - `cms_requests_total` (counter): requests by method, status
//! - `cms_request_duration_seconds` (histogram): request latency
//! - `cms_renders_total` (counter): render passes by view, outcome
//! - `cms_render_duration_seconds` (histogram): render latency by view
//! - `cms_route_misses_total` (counter): paths with no route module

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint started");
    Ok(())
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "cms_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("cms_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_render(view: &'static str, ok: bool, start: Instant) {
    let outcome = if ok { "ok" } else { "error" };
    ::metrics::counter!("cms_renders_total", "view" => view, "outcome" => outcome).increment(1);
    ::metrics::histogram!("cms_render_duration_seconds", "view" => view)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_route_miss() {
    ::metrics::counter!("cms_route_misses_total").increment(1);
}
