//! Handlers for the `/enrollments` resource.
//!
//! Enrollments are addressed by the pair `/{student_id}/{course_id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use campus_core::types::DbId;
use campus_db::models::enrollment::{CreateEnrollment, UpdateEnrollment};
use campus_db::repositories::EnrollmentRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(student_id: DbId, course_id: DbId) -> AppError {
    AppError::NotFound(format!(
        "Enrollment of student {student_id} in course {course_id} not found"
    ))
}

/// GET /api/v1/enrollments
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let enrollments = EnrollmentRepo::list(&state.pool).await?;
    Ok(DataResponse::new(enrollments))
}

/// GET /api/v1/enrollments/{student_id}/{course_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::find_by_id(&state.pool, student_id, course_id)
        .await?
        .ok_or_else(|| not_found(student_id, course_id))?;
    Ok(DataResponse::new(enrollment))
}

/// GET /api/v1/enrollments/{student_id}/{course_id}/details
pub async fn get_details(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let details = EnrollmentRepo::find_with_details(&state.pool, student_id, course_id)
        .await?
        .ok_or_else(|| not_found(student_id, course_id))?;
    DataResponse::render(&state.views.enrollment_details, &details)
}

/// POST /api/v1/enrollments
///
/// Enrolling the same pair twice, or an unknown student or course, is a
/// constraint violation.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateEnrollment>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        student_id = enrollment.student_id,
        course_id = enrollment.course_id,
        "Enrollment created"
    );
    Ok((StatusCode::CREATED, DataResponse::new(enrollment)))
}

/// PUT /api/v1/enrollments/{student_id}/{course_id}
///
/// Only `enrolled_on` can change.
pub async fn update(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateEnrollment>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::update(&state.pool, student_id, course_id, &input)
        .await?
        .ok_or_else(|| not_found(student_id, course_id))?;
    Ok(DataResponse::new(enrollment))
}

/// DELETE /api/v1/enrollments/{student_id}/{course_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let enrollment = EnrollmentRepo::delete(&state.pool, student_id, course_id)
        .await?
        .ok_or_else(|| not_found(student_id, course_id))?;
    tracing::info!(student_id, course_id, "Enrollment deleted");
    Ok(DataResponse::new(enrollment))
}
