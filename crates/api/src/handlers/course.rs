//! Handlers for the `/courses` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use campus_core::error::CoreError;
use campus_core::types::DbId;
use campus_db::models::course::{CreateCourse, UpdateCourse};
use campus_db::repositories::{CourseRepo, EnrollmentRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Course",
        id,
    })
}

/// GET /api/v1/courses
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(DataResponse::new(courses))
}

/// GET /api/v1/courses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(DataResponse::new(course))
}

/// POST /api/v1/courses
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::create(&state.pool, &input).await?;
    tracing::info!(id = course.id, name = %course.name, "Course created");
    Ok((StatusCode::CREATED, DataResponse::new(course)))
}

/// PUT /api/v1/courses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(DataResponse::new(course))
}

/// DELETE /api/v1/courses/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Course deleted");
    Ok(DataResponse::new(course))
}

/// GET /api/v1/courses/{id}/students
///
/// The course with its enrolled students; student emails are masked.
pub async fn get_with_students(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let course = CourseRepo::find_with_students(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    DataResponse::render(&state.views.course_with_students, &course)
}

/// GET /api/v1/courses/{id}/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let enrollments = EnrollmentRepo::list_by_course(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    DataResponse::render_all(&state.views.course_enrollment, &enrollments)
}
