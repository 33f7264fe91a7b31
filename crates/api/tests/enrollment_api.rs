//! HTTP-level integration tests for courses, enrollments and the joined
//! views between them.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create(pool: &PgPool, uri: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(common::build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let mut json = body_json(response).await;
    json["data"].take()
}

async fn seed_student(pool: &PgPool, name: &str, email: &str) -> i64 {
    create(pool, "/api/v1/students", json!({ "name": name, "email": email })).await["id"]
        .as_i64()
        .unwrap()
}

async fn seed_course(pool: &PgPool, name: &str) -> i64 {
    create(
        pool,
        "/api/v1/courses",
        json!({
            "name": name,
            "description": "Advanced techniques and good practices",
            "workload_hours": 60
        }),
    )
    .await["id"]
        .as_i64()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_crud_over_http(pool: PgPool) {
    let id = seed_course(&pool, "JavaScript").await;
    let uri = format!("/api/v1/courses/{id}");

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "workload_hours": 80 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["workload_hours"], 80);
    assert_eq!(json["data"]["name"], "JavaScript");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Course with id {id} not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_workload_is_a_validation_error(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/courses",
        json!({ "name": "Empty", "workload_hours": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_students_view_masks_each_student(pool: PgPool) {
    let course_id = seed_course(&pool, "Rust").await;
    let ana = seed_student(&pool, "Ana", "ana@x.com").await;
    let bea = seed_student(&pool, "Bea", "bea@y.org").await;

    for student_id in [ana, bea] {
        create(
            &pool,
            "/api/v1/enrollments",
            json!({ "student_id": student_id, "course_id": course_id }),
        )
        .await;
    }

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/courses/{course_id}/students"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Rust");
    let students = json["data"]["students"].as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0]["email"], "a**@*.**m");
    assert_eq!(students[1]["email"], "b**@*.**g");
    assert!(students[0]["enrolled_on"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_enrollments_mask_student_email(pool: PgPool) {
    let course_id = seed_course(&pool, "Rust").await;
    let ana = seed_student(&pool, "Ana", "ana@x.com").await;
    create(
        &pool,
        "/api/v1/enrollments",
        json!({ "student_id": ana, "course_id": course_id }),
    )
    .await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/courses/{course_id}/enrollments"),
    )
    .await;
    let json = body_json(response).await;
    let listing = json["data"].as_array().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0]["student_name"], "Ana");
    assert_eq!(listing[0]["student_email"], "a**@*.**m");

    let response = get(
        common::build_test_app(pool),
        "/api/v1/courses/999999/enrollments",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollment_lifecycle_by_composite_key(pool: PgPool) {
    let student_id = seed_student(&pool, "Roberto", "roberto@email.com").await;
    let course_id = seed_course(&pool, "JavaScript Avançado").await;

    let created = create(
        &pool,
        "/api/v1/enrollments",
        json!({ "student_id": student_id, "course_id": course_id, "enrolled_on": "2024-03-01" }),
    )
    .await;
    assert_eq!(created["enrolled_on"], "2024-03-01");

    let uri = format!("/api/v1/enrollments/{student_id}/{course_id}");

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        json!({ "enrolled_on": "2023-08-01" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["enrolled_on"], "2023-08-01");

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/students/{student_id}/enrollments"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["course_name"], "JavaScript Avançado");

    let response = delete(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(common::build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        format!("Enrollment of student {student_id} in course {course_id} not found")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollment_details_mask_the_student(pool: PgPool) {
    let student_id = seed_student(&pool, "Ana", "ana@x.com").await;
    let course_id = seed_course(&pool, "Rust").await;
    create(
        &pool,
        "/api/v1/enrollments",
        json!({ "student_id": student_id, "course_id": course_id }),
    )
    .await;

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/enrollments/{student_id}/{course_id}/details"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["student_id"], student_id);
    assert_eq!(json["data"]["student"]["name"], "Ana");
    assert_eq!(json["data"]["student"]["email"], "a**@*.**m");
    assert_eq!(json["data"]["course"]["name"], "Rust");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_enrollment_returns_400(pool: PgPool) {
    let student_id = seed_student(&pool, "Twice", "twice@x.com").await;
    let course_id = seed_course(&pool, "Once").await;
    let body = json!({ "student_id": student_id, "course_id": course_id });

    create(&pool, "/api/v1/enrollments", body.clone()).await;
    let response = post_json(common::build_test_app(pool), "/api/v1/enrollments", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "CONSTRAINT_VIOLATION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn enrollments_of_missing_student_returns_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool),
        "/api/v1/students/999999/enrollments",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
