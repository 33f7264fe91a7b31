pub mod addresses;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod students;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                  list, create
/// /students/{id}                             get, update, delete
/// /students/{id}/addresses                   student with its addresses
/// /students/{id}/enrollments                 enrollments of one student
///
/// /addresses                                 list, create
/// /addresses/{id}                            get, update, delete
///
/// /courses                                   list, create
/// /courses/{id}                              get, update, delete
/// /courses/{id}/students                     course with enrolled students
/// /courses/{id}/enrollments                  enrollments in one course
///
/// /enrollments                               list, create
/// /enrollments/{student_id}/{course_id}      get, update, delete
/// /enrollments/{student_id}/{course_id}/details
///
/// /users                                     list, create
/// /users/{id}                                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/addresses", addresses::router())
        .nest("/courses", courses::router())
        .nest("/enrollments", enrollments::router())
        .nest("/users", users::router())
}
