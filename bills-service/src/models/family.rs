use super::{AuditFields, User};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Family {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub audit: AuditFields,
    pub name: String,
    /// Members, loaded separately from the `users` table.
    #[serde(default)]
    #[sqlx(skip)]
    pub users: Vec<User>,
}

impl Family {
    pub const TABLE: &'static str = "families";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            audit: AuditFields::new(),
            name: name.into(),
            users: Vec::new(),
        }
    }

    /// Create a member of this family.
    pub fn add_user(&mut self, phone_number: impl Into<String>) -> &User {
        self.users.push(User::new(phone_number, self.audit.id));
        &self.users[self.users.len() - 1]
    }
}
