//! Bills Service entry point.

use bills_service::config::BillsConfig;
use bills_service::startup::Application;

use service_core::observability::init_tracing;
use tokio::signal;

/// Resolve on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut terminate =
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!(error = %e, "SIGTERM handler unavailable, waiting on Ctrl+C only");
                    if let Err(e) = signal::ctrl_c().await {
                        tracing::error!(error = %e, "Ctrl+C handler unavailable");
                    }
                    return;
                }
            };

        tokio::select! {
            _ = signal::ctrl_c() => tracing::info!(signal = "SIGINT", "Shutdown requested"),
            _ = terminate.recv() => tracing::info!(signal = "SIGTERM", "Shutdown requested"),
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C handler unavailable");
            return;
        }
        tracing::info!(signal = "ctrl_c", "Shutdown requested");
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = BillsConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        version = %config.service_version,
        otlp_endpoint = ?config.otlp_endpoint,
        "Starting PariwarOS bills-service"
    );

    // Log configuration (mask sensitive values)
    tracing::info!(
        service_name = %config.service_name,
        port = %config.common.port,
        startup_mode = %config.startup_mode,
        bills_source = %config.bills_source,
        database_configured = config.database.is_some(),
        "Configuration loaded"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to build application");
        std::io::Error::other(format!("Application build error: {}", e))
    })?;

    app.run_until(shutdown_signal()).await.map_err(|e| {
        tracing::error!(error = %e, "Application error");
        e
    })?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
