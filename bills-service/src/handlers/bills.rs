use crate::models::BillSummary;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `GET /api/v1/bills`
pub async fn list_bills(
    State(state): State<AppState>,
) -> Result<Json<Vec<BillSummary>>, AppError> {
    // TODO: pass the caller's user id once requests carry an authenticated session.
    let bills = state.bills.list_bills_for_user(None).await.map_err(|e| {
        tracing::error!(error = %e, source = state.bills.name(), "Failed to list bills");
        e
    })?;

    tracing::debug!(count = bills.len(), source = state.bills.name(), "Bills listed");

    Ok(Json(bills))
}
