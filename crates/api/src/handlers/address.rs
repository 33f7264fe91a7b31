//! Handlers for the `/addresses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::address::{CreateAddress, UpdateAddress};
use campus_db::repositories::AddressRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Address",
        id,
    })
}

/// GET /api/v1/addresses
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let addresses = AddressRepo::list(&state.pool).await?;
    Ok(DataResponse::new(addresses))
}

/// GET /api/v1/addresses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let address = AddressRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(DataResponse::new(address))
}

/// POST /api/v1/addresses
///
/// An unknown `student_id` is rejected by the store as a constraint violation.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateAddress>,
) -> AppResult<impl IntoResponse> {
    let address = AddressRepo::create(&state.pool, &input).await?;
    tracing::info!(id = address.id, student_id = address.student_id, "Address created");
    Ok((StatusCode::CREATED, DataResponse::new(address)))
}

/// PUT /api/v1/addresses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateAddress>,
) -> AppResult<impl IntoResponse> {
    let address = AddressRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(DataResponse::new(address))
}

/// DELETE /api/v1/addresses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let address = AddressRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Address deleted");
    Ok(DataResponse::new(address))
}
