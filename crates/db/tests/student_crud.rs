//! Integration tests for the student repository against a real database.
//!
//! Covers the full lifecycle (create, read, partial update, delete), the
//! absent-id behaviour of every by-id operation, and uniqueness enforcement
//! under concurrent inserts.

use assert_matches::assert_matches;
use campus_core::error::CoreError;
use campus_db::classify_error;
use campus_db::models::student::{CreateStudent, UpdateStudent};
use campus_db::repositories::StudentRepo;
use chrono::NaiveDate;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_student(name: &str, email: &str) -> CreateStudent {
    CreateStudent {
        name: name.to_string(),
        email: email.to_string(),
        birth_date: None,
        enrollment_number: None,
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_generated_id_and_input_fields(pool: PgPool) {
    let input = CreateStudent {
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 15),
        enrollment_number: Some("1234567890".to_string()),
        ..new_student("Ana", "ana@x.com")
    };

    let created = StudentRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);

    let fetched = StudentRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("student should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Ana");
    assert_eq!(fetched.email, "ana@x.com");
    assert_eq!(fetched.birth_date, NaiveDate::from_ymd_opt(1990, 1, 15));
    assert_eq!(fetched.enrollment_number.as_deref(), Some("1234567890"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_all_rows_in_id_order(pool: PgPool) {
    let a = StudentRepo::create(&pool, &new_student("A", "a@x.com"))
        .await
        .unwrap();
    let b = StudentRepo::create(&pool, &new_student("B", "b@x.com"))
        .await
        .unwrap();

    let all = StudentRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_changes_only_supplied_fields(pool: PgPool) {
    let created = StudentRepo::create(
        &pool,
        &CreateStudent {
            enrollment_number: Some("42".to_string()),
            ..new_student("Roberto Gomide", "roberto@email.com")
        },
    )
    .await
    .unwrap();

    let update = UpdateStudent {
        name: Some("Denecley Gomide".to_string()),
        ..Default::default()
    };
    let updated = StudentRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("student should exist");
    assert_eq!(updated.name, "Denecley Gomide");

    let fetched = StudentRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Denecley Gomide");
    assert_eq!(fetched.email, "roberto@email.com");
    assert_eq!(fetched.enrollment_number.as_deref(), Some("42"));
    assert_eq!(fetched.created_at, created.created_at);
    assert!(fetched.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_nonexistent_returns_none_and_creates_nothing(pool: PgPool) {
    let update = UpdateStudent {
        name: Some("Bea".to_string()),
        ..Default::default()
    };
    let result = StudentRepo::update(&pool, 42, &update).await.unwrap();
    assert!(result.is_none());

    assert!(StudentRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_returns_last_state_then_lookup_is_absent(pool: PgPool) {
    let created = StudentRepo::create(&pool, &new_student("Gone", "gone@x.com"))
        .await
        .unwrap();

    let deleted = StudentRepo::delete(&pool, created.id)
        .await
        .unwrap()
        .expect("delete should return the removed row");
    assert_eq!(deleted, created);

    assert!(StudentRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn by_id_operations_on_missing_id_return_none(pool: PgPool) {
    assert!(StudentRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(StudentRepo::update(&pool, 999_999, &UpdateStudent::default())
        .await
        .unwrap()
        .is_none());
    assert!(StudentRepo::delete(&pool, 999_999).await.unwrap().is_none());
    assert!(StudentRepo::find_with_addresses(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_a_constraint_violation(pool: PgPool) {
    StudentRepo::create(&pool, &new_student("One", "dup@x.com"))
        .await
        .unwrap();

    let err = StudentRepo::create(&pool, &new_student("Two", "dup@x.com"))
        .await
        .unwrap_err();
    assert_matches!(
        classify_error(&err),
        CoreError::ConstraintViolation(msg) if msg.contains("uq_students_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_duplicate_creates_exactly_one_succeeds(pool: PgPool) {
    let first = new_student("Left", "race@x.com");
    let second = new_student("Right", "race@x.com");

    let (a, b) = tokio::join!(
        StudentRepo::create(&pool, &first),
        StudentRepo::create(&pool, &second),
    );

    let results = [a, b];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one insert must win");

    let failure = results
        .iter()
        .find_map(|r| r.as_ref().err())
        .expect("one insert must fail");
    assert_matches!(classify_error(failure), CoreError::ConstraintViolation(_));

    assert_eq!(StudentRepo::list(&pool).await.unwrap().len(), 1);
}
