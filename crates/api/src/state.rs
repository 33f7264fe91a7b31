use std::sync::Arc;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing in it is mutable: concurrent requests share only the pool, which
/// hands each query its own connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: campus_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Output projections applied to records before they leave the service.
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(pool: campus_db::DbPool, config: ServerConfig) -> Self {
        let views = Views::new(config.email_mask.policy());
        Self {
            pool,
            config: Arc::new(config),
            views: Arc::new(views),
        }
    }
}
