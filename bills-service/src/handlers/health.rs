use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use service_core::error::AppError;
use service_core::observability::render_metrics;

/// Liveness check. Never touches the database.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "OK" })))
}

/// Readiness check: fails only when a configured database stops answering.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let database = match &state.db {
        None => "disabled",
        Some(db) => {
            db.health_check().await.map_err(|e| {
                tracing::warn!(error = %e, "Readiness check failed - database unavailable");
                AppError::ServiceUnavailable
            })?;
            "connected"
        }
    };

    tracing::debug!(database, "Readiness check passed");

    Ok(Json(json!({
        "status": "ready",
        "database": database,
        "bills_source": state.bills.name()
    })))
}

/// Metrics endpoint for Prometheus scraping.
pub async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        render_metrics(),
    )
}
