//! Application startup and lifecycle management.

use crate::config::{BillsConfig, BillsSource as BillsSourceKind, StartupMode};
use crate::handlers;
use crate::services::{BillSource, Database, MockBillSource, PgBillSource};
use axum::{middleware, routing::get, Router};
use service_core::error::AppError;
use service_core::middleware::metrics::metrics_middleware;
use service_core::middleware::tracing::{request_id_middleware, REQUEST_ID_HEADER};
use service_core::observability::init_metrics;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<Database>,
    pub bills: Arc<dyn BillSource>,
}

/// Build the HTTP router around an already assembled state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/api/v1/bills", get(handlers::list_bills))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Connect and migrate the database if configured, pick the bill source, and bind.
    pub async fn build(config: BillsConfig) -> Result<Self, AppError> {
        init_metrics();

        let db = match &config.database {
            Some(database) => {
                let db = Database::new(database).await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to connect to PostgreSQL");
                    e
                })?;

                db.run_migrations().await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to run migrations");
                    e
                })?;

                Some(db)
            }
            None if config.startup_mode == StartupMode::Strict => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "DATABASE_URL is required in strict startup mode"
                )));
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database for demo.");
                None
            }
        };

        let bills: Arc<dyn BillSource> = match (config.bills_source, &db) {
            (BillsSourceKind::Mock, _) => Arc::new(MockBillSource),
            (BillsSourceKind::Database, Some(db)) => Arc::new(PgBillSource::new(db.clone())),
            (BillsSourceKind::Database, None) => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "BILLS_SOURCE=database requires DATABASE_URL"
                )));
            }
        };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!(error = %e, addr = %addr, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port = port,
            startup_mode = %config.startup_mode,
            bills_source = bills.name(),
            database = db.is_some(),
            "Bills service listener bound"
        );

        Ok(Self {
            port,
            listener,
            state: AppState { db, bills },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a reference to the database, if one is configured.
    pub fn db(&self) -> Option<&Database> {
        self.state.db.as_ref()
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests and return.
    pub async fn run_until<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        tracing::info!(
            service = "bills-service",
            version = env!("CARGO_PKG_VERSION"),
            port = self.port,
            "Service ready to accept connections"
        );

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server drained");
        Ok(())
    }
}
