//! Repository for the `enrollments` table.
//!
//! Enrollments are keyed by `(student_id, course_id)`.

use campus_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::Course;
use crate::models::enrollment::{
    CourseEnrollment, CreateEnrollment, Enrollment, EnrollmentDetails, EnrollmentListing,
    StudentEnrollment, UpdateEnrollment,
};
use crate::models::student::Student;
use crate::repositories::{course_repo, student_repo};

const COLUMNS: &str = "student_id, course_id, enrolled_on, created_at, updated_at";

/// Provides CRUD and listing operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a student in a course. `enrolled_on` defaults to the current date.
    ///
    /// Enrolling the same pair twice violates the primary key; enrolling an
    /// unknown student or course violates a foreign key.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnrollment,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (student_id, course_id, enrolled_on) \
             VALUES ($1, $2, COALESCE($3, CURRENT_DATE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(input.student_id)
            .bind(input.course_id)
            .bind(input.enrolled_on)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 AND course_id = $2"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }

    /// List every enrollment with the student and course names.
    pub async fn list(pool: &PgPool) -> Result<Vec<EnrollmentListing>, sqlx::Error> {
        sqlx::query_as::<_, EnrollmentListing>(
            "SELECT e.student_id, e.course_id, e.enrolled_on, \
                    s.name AS student_name, c.name AS course_name \
             FROM enrollments e \
             JOIN students s ON s.id = e.student_id \
             JOIN courses c ON c.id = e.course_id \
             ORDER BY e.student_id, e.course_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Fetch an enrollment with its full student and course rows.
    ///
    /// Runs three lookups in order on one connection. Returns `None` if the
    /// enrollment (or, after a concurrent delete, either side of it) is gone.
    pub async fn find_with_details(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<EnrollmentDetails>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM enrollments WHERE student_id = $1 AND course_id = $2"
        );
        let Some(enrollment) = sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {} FROM students WHERE id = $1",
            student_repo::COLUMNS
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(student_id)
            .fetch_optional(&mut *conn)
            .await?;

        let query = format!("SELECT {} FROM courses WHERE id = $1", course_repo::COLUMNS);
        let course = sqlx::query_as::<_, Course>(&query)
            .bind(course_id)
            .fetch_optional(&mut *conn)
            .await?;

        Ok(match (student, course) {
            (Some(student), Some(course)) => Some(EnrollmentDetails {
                enrollment,
                student,
                course,
            }),
            _ => None,
        })
    }

    /// List the enrollments of one student, with course details.
    ///
    /// Returns `None` when the student does not exist and an empty list when
    /// it has no enrollments. Both steps run on one connection.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Option<Vec<StudentEnrollment>>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1)")
                .bind(student_id)
                .fetch_one(&mut *conn)
                .await?;
        if !exists {
            return Ok(None);
        }

        sqlx::query_as::<_, StudentEnrollment>(
            "SELECT e.student_id, e.course_id, e.enrolled_on, \
                    c.name AS course_name, \
                    c.description AS course_description, \
                    c.workload_hours AS course_workload_hours \
             FROM enrollments e \
             JOIN courses c ON c.id = e.course_id \
             WHERE e.student_id = $1 \
             ORDER BY e.course_id",
        )
        .bind(student_id)
        .fetch_all(&mut *conn)
        .await
        .map(Some)
    }

    /// List the enrollments in one course, with student name and email.
    ///
    /// Returns `None` when the course does not exist.
    pub async fn list_by_course(
        pool: &PgPool,
        course_id: DbId,
    ) -> Result<Option<Vec<CourseEnrollment>>, sqlx::Error> {
        let mut conn = pool.acquire().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM courses WHERE id = $1)")
                .bind(course_id)
                .fetch_one(&mut *conn)
                .await?;
        if !exists {
            return Ok(None);
        }

        sqlx::query_as::<_, CourseEnrollment>(
            "SELECT e.student_id, e.course_id, e.enrolled_on, \
                    s.name AS student_name, s.email AS student_email \
             FROM enrollments e \
             JOIN students s ON s.id = e.student_id \
             WHERE e.course_id = $1 \
             ORDER BY e.student_id",
        )
        .bind(course_id)
        .fetch_all(&mut *conn)
        .await
        .map(Some)
    }

    /// Update the enrollment date. Returns `None` if the pair is not enrolled.
    pub async fn update(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
        input: &UpdateEnrollment,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "UPDATE enrollments SET \
                enrolled_on = COALESCE($3, enrolled_on), \
                updated_at = NOW() \
             WHERE student_id = $1 AND course_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .bind(input.enrolled_on)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
    ) -> Result<Option<Enrollment>, sqlx::Error> {
        let query = format!(
            "DELETE FROM enrollments WHERE student_id = $1 AND course_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(student_id)
            .bind(course_id)
            .fetch_optional(pool)
            .await
    }
}
