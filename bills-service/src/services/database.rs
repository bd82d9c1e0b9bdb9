//! Database service for bills-service.

use crate::config::DatabaseConfig;
use crate::models::BillSummary;
use secrecy::ExposeSecret;
use service_core::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

/// Embedded schema migrations for the five household tables.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(config), fields(service = "bills-service"))]
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(config.url.expose_secret())
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;

        Ok(())
    }

    /// Create or bring the household tables up to date. Re-running is a no-op.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// List live bills with their biller's provider name, soonest due first.
    ///
    /// `None` lists every bill in the store; `Some(user_id)` restricts to
    /// billers registered by that user.
    #[instrument(skip(self))]
    pub async fn list_bill_summaries(
        &self,
        user_id: Option<Uuid>,
    ) -> Result<Vec<BillSummary>, AppError> {
        let bills = sqlx::query_as::<_, BillSummary>(
            r#"
            SELECT bl.provider_name, b.amount, b.due_date, b.is_paid
            FROM bills b
            JOIN billers bl ON bl.id = b.biller_id
            WHERE b.deleted_utc IS NULL
              AND bl.deleted_utc IS NULL
              AND ($1::uuid IS NULL OR bl.user_id = $1)
            ORDER BY b.due_date, bl.provider_name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list bills: {}", e)))?;

        info!(count = bills.len(), "Bills listed");

        Ok(bills)
    }
}
