use super::AuditFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Uploaded household document. `storage_key` is opaque; no blob store is attached.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub file_name: String,
    pub storage_key: String,
}

impl Document {
    pub const TABLE: &'static str = "documents";
}
