use super::AuditFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Household member, identified by a phone number unique across all users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub phone_number: String,
    pub family_id: Uuid,
}

impl User {
    pub const TABLE: &'static str = "users";

    pub fn new(phone_number: impl Into<String>, family_id: Uuid) -> Self {
        Self {
            audit: AuditFields::new(),
            phone_number: phone_number.into(),
            family_id,
        }
    }
}
