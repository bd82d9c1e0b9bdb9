//! Domain models for bills-service.

mod audit;
mod bill;
mod biller;
mod document;
mod family;
mod user;

pub use audit::AuditFields;
pub use bill::{Bill, BillSummary};
pub use biller::Biller;
pub use document::Document;
pub use family::Family;
pub use user::User;

/// Tables created by the embedded migrations, parents before children.
pub const TABLES: [&str; 5] = [
    Family::TABLE,
    User::TABLE,
    Document::TABLE,
    Biller::TABLE,
    Bill::TABLE,
];
