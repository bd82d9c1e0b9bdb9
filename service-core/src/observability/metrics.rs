use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the process-wide Prometheus recorder. Safe to call more than once.
pub fn init_metrics() {
    PROMETHEUS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            // Another recorder already owns the global slot.
            tracing::warn!(error = %e, "Prometheus recorder not installed globally");
            PrometheusBuilder::new().build_recorder().handle()
        }
    });
}

/// Render the Prometheus text exposition for the /metrics endpoint.
pub fn render_metrics() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}
