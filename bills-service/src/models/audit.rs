//! Identity and timestamp columns shared by every household record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Embedded by value in each entity and flattened into its row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AuditFields {
    pub id: Uuid,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
    /// Soft-delete marker; deleted rows are excluded from reads.
    pub deleted_utc: Option<DateTime<Utc>>,
}

impl AuditFields {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_utc: now,
            updated_utc: now,
            deleted_utc: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_utc.is_some()
    }

    /// Mark the record deleted, bumping `updated_utc`.
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.updated_utc = now;
        self.deleted_utc = Some(now);
    }
}

impl Default for AuditFields {
    fn default() -> Self {
        Self::new()
    }
}
