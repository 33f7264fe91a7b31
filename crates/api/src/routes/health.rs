use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use campus_core::tasks::race_first;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// Liveness reply used by cross-origin clients to probe the server.
#[derive(Serialize)]
pub struct PingResponse {
    pub message: &'static str,
}

/// A database probe slower than this reports the service as degraded.
const DB_PROBE_DEADLINE: Duration = Duration::from_secs(2);

type Probe<'a> = Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let probe: Probe<'_> = Box::pin(async { campus_db::health_check(&state.pool).await.is_ok() });
    let deadline: Probe<'_> = Box::pin(async {
        tokio::time::sleep(DB_PROBE_DEADLINE).await;
        false
    });
    let db_healthy = race_first([probe, deadline]).await.unwrap_or(false);

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// GET /ping -- does not touch the database.
async fn ping() -> Json<PingResponse> {
    Json(PingResponse { message: "pong" })
}

/// Mount health and ping routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/ping", get(ping))
}
