//! HTTP handlers for bills-service.

pub mod bills;
pub mod health;

pub use bills::list_bills;
pub use health::{health_check, metrics_handler, readiness_check};
