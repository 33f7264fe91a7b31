//! Repository for the `courses` table.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{
    Course, CourseWithStudents, CreateCourse, EnrolledStudent, UpdateCourse,
};

pub(crate) const COLUMNS: &str =
    "id, name, description, workload_hours, created_at, updated_at";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (name, description, workload_hours) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.workload_hours)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY id");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Fetch a course, then join its enrolled students, on one connection.
    ///
    /// Returns `None` if the course does not exist.
    pub async fn find_with_students(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseWithStudents>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        let Some(course) = sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let students = sqlx::query_as::<_, EnrolledStudent>(
            "SELECT s.id, s.name, s.email, s.birth_date, s.enrollment_number, e.enrolled_on \
             FROM students s \
             JOIN enrollments e ON e.student_id = s.id \
             WHERE e.course_id = $1 \
             ORDER BY s.id",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Some(CourseWithStudents { course, students }))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                workload_hours = COALESCE($4, workload_hours), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.workload_hours)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("DELETE FROM courses WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
