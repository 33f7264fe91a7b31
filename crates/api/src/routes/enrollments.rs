use axum::routing::get;
use axum::Router;

use crate::handlers::enrollment;
use crate::state::AppState;

/// Routes mounted at `/enrollments`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{student_id}/{course_id}          -> get_by_id
/// PUT    /{student_id}/{course_id}          -> update
/// DELETE /{student_id}/{course_id}          -> delete
/// GET    /{student_id}/{course_id}/details  -> get_details
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(enrollment::list).post(enrollment::create))
        .route(
            "/{student_id}/{course_id}",
            get(enrollment::get_by_id)
                .put(enrollment::update)
                .delete(enrollment::delete),
        )
        .route(
            "/{student_id}/{course_id}/details",
            get(enrollment::get_details),
        )
}
