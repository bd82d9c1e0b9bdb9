//! Bill records and the flattened listing shape served over HTTP.

use super::{AuditFields, Biller};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub biller_id: Uuid,
    pub amount: Decimal,
    /// Stored as text, as issued by the provider (e.g. `2025-09-15`).
    pub due_date: String,
    pub is_paid: bool,
}

impl Bill {
    pub const TABLE: &'static str = "bills";

    pub fn new(biller_id: Uuid, amount: Decimal, due_date: impl Into<String>) -> Self {
        Self {
            audit: AuditFields::new(),
            biller_id,
            amount,
            due_date: due_date.into(),
            is_paid: false,
        }
    }

    /// Flatten against the biller that issued it.
    pub fn summary(&self, biller: &Biller) -> BillSummary {
        BillSummary {
            provider_name: biller.provider_name.clone(),
            amount: self.amount,
            due_date: self.due_date.clone(),
            is_paid: self.is_paid,
        }
    }
}

/// One entry of `GET /api/v1/bills`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct BillSummary {
    pub provider_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub due_date: String,
    pub is_paid: bool,
}
