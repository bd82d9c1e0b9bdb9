//! Services module for bills-service.

pub mod bill_source;
pub mod database;

pub use bill_source::{BillSource, MockBillSource, PgBillSource};
pub use database::{Database, MIGRATOR};
