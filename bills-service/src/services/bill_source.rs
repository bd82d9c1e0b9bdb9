//! Where the bills listing gets its data.
//!
//! Handlers only see [`BillSource`], so the mock and PostgreSQL implementations
//! can be swapped by configuration without touching routing.

use crate::models::BillSummary;
use crate::services::Database;
use async_trait::async_trait;
use rust_decimal::Decimal;
use service_core::error::AppError;
use uuid::Uuid;

#[async_trait]
pub trait BillSource: Send + Sync {
    /// List bills visible to `user_id`, or the whole household when `None`.
    async fn list_bills_for_user(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<Vec<BillSummary>, AppError>;

    /// Short label for logs and readiness output.
    fn name(&self) -> &'static str;
}

/// Fixed demo data, rebuilt on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBillSource;

impl MockBillSource {
    pub fn bills() -> Vec<BillSummary> {
        vec![
            BillSummary {
                provider_name: "Telangana Electricity".to_string(),
                amount: Decimal::new(124500, 2),
                due_date: "2025-09-15".to_string(),
                is_paid: false,
            },
            BillSummary {
                provider_name: "Airtel Postpaid".to_string(),
                amount: Decimal::new(49900, 2),
                due_date: "2025-08-20".to_string(),
                is_paid: true,
            },
        ]
    }
}

#[async_trait]
impl BillSource for MockBillSource {
    async fn list_bills_for_user(
        &self,
        _user_id: Option<Uuid>,
    ) -> Result<Vec<BillSummary>, AppError> {
        Ok(Self::bills())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Reads bills joined with their billers from PostgreSQL.
#[derive(Clone)]
pub struct PgBillSource {
    db: Database,
}

impl PgBillSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BillSource for PgBillSource {
    async fn list_bills_for_user(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<Vec<BillSummary>, AppError> {
        self.db.list_bill_summaries(user_id).await
    }

    fn name(&self) -> &'static str {
        "database"
    }
}
