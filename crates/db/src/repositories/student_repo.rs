//! Repository for the `students` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::Address;
use crate::models::student::{CreateStudent, Student, StudentWithAddresses, UpdateStudent};
use crate::repositories::address_repo;

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, name, email, birth_date, enrollment_number, created_at, updated_at";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row with its generated id.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (name, email, birth_date, enrollment_number) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.birth_date)
            .bind(&input.enrollment_number)
            .fetch_one(pool)
            .await
    }

    /// Find a student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Fetch a student and then its addresses on the same connection.
    ///
    /// Returns `None` if the student does not exist; never a student with a
    /// partially populated address list.
    pub async fn find_with_addresses(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StudentWithAddresses>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        let Some(student) = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {} FROM addresses WHERE student_id = $1 ORDER BY id",
            address_repo::COLUMNS
        );
        let addresses = sqlx::query_as::<_, Address>(&query)
            .bind(id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(StudentWithAddresses { student, addresses }))
    }

    /// Update a student. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                birth_date = COALESCE($4, birth_date), \
                enrollment_number = COALESCE($5, enrollment_number), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.birth_date)
            .bind(&input.enrollment_number)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student, returning the row as it was before deletion.
    ///
    /// Addresses and enrollments of the student are removed by the store's
    /// `ON DELETE CASCADE` rules.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("DELETE FROM students WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
