use super::AuditFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Service provider a user receives bills from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Biller {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub provider_name: String,
    /// Consumer or account number at the provider.
    pub consumer_id: String,
}

impl Biller {
    pub const TABLE: &'static str = "billers";

    pub fn new(
        user_id: Uuid,
        family_id: Uuid,
        provider_name: impl Into<String>,
        consumer_id: impl Into<String>,
    ) -> Self {
        Self {
            audit: AuditFields::new(),
            user_id,
            family_id,
            provider_name: provider_name.into(),
            consumer_id: consumer_id.into(),
        }
    }
}
