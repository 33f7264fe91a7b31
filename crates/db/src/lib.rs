//! Data-access layer: connection pool lifecycle, store error classification,
//! row models and per-entity repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub use error::classify_error;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing and acquisition limits.
///
/// Every repository call borrows one connection for its own duration only;
/// `acquire_timeout` bounds how long a call waits for a free slot.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolConfig {
    /// Load pool settings from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `DB_MAX_CONNECTIONS`      | `10`    |
    /// | `DB_MIN_CONNECTIONS`      | `2`     |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`     |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build pool settings from any key lookup; unset keys keep the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let max_connections: u32 = lookup("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(defaults.max_connections);

        let min_connections: u32 = lookup("DB_MIN_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MIN_CONNECTIONS must be a valid u32"))
            .unwrap_or(defaults.min_connections);

        let acquire_timeout = lookup("DB_ACQUIRE_TIMEOUT_SECS")
            .map(|v| {
                Duration::from_secs(
                    v.parse()
                        .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64"),
                )
            })
            .unwrap_or(defaults.acquire_timeout);

        Self {
            max_connections,
            min_connections,
            acquire_timeout,
        }
    }
}

/// Create a connection pool from a database URL.
///
/// The pool is the only store handle in the process: it is opened once at
/// startup, passed explicitly to every repository call and closed with
/// [`close_pool`] at shutdown.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Verify the store answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the bundled schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Close every pooled connection, waiting for borrowed ones to be returned.
pub async fn close_pool(pool: &DbPool) {
    pool.close().await;
    tracing::info!("Database connection pool closed");
}
