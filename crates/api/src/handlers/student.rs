//! Handlers for the `/students` resource.
//!
//! Every student leaving the service goes through `Views::student`, so
//! emails are masked on reads and writes alike.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::student::{CreateStudent, UpdateStudent};
use campus_db::repositories::{EnrollmentRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Student",
        id,
    })
}

/// GET /api/v1/students
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list(&state.pool).await?;
    DataResponse::render_all(&state.views.student, &students)
}

/// GET /api/v1/students/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    DataResponse::render(&state.views.student, &student)
}

/// POST /api/v1/students
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::create(&state.pool, &input).await?;
    tracing::info!(id = student.id, "Student created");
    Ok((
        StatusCode::CREATED,
        DataResponse::render(&state.views.student, &student)?,
    ))
}

/// PUT /api/v1/students/{id}
///
/// Partial update: omitted fields keep their current value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Student updated");
    DataResponse::render(&state.views.student, &student)
}

/// DELETE /api/v1/students/{id}
///
/// Responds with the student as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Student deleted");
    DataResponse::render(&state.views.student, &student)
}

/// GET /api/v1/students/{id}/addresses
pub async fn get_with_addresses(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_with_addresses(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    DataResponse::render(&state.views.student, &student)
}

/// GET /api/v1/students/{id}/enrollments
///
/// 404 when the student does not exist, an empty list when it has no
/// enrollments.
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let enrollments = EnrollmentRepo::list_by_student(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(DataResponse::new(enrollments))
}
