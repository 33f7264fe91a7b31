//! Enrollment model and DTOs.
//!
//! An enrollment links one student to one course and is identified by the
//! composite key `(student_id, course_id)`. Only `enrolled_on` is mutable.

use campus_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::course::Course;
use crate::models::student::Student;

/// A row from the `enrollments` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Enrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_on: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for enrolling a student. `enrolled_on` defaults to today.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_on: Option<Date>,
}

/// DTO for updating an enrollment.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEnrollment {
    pub enrolled_on: Option<Date>,
}

/// An enrollment joined with the student and course names.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct EnrollmentListing {
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_on: Date,
    pub student_name: String,
    pub course_name: String,
}

/// One enrollment of a given student, with course details.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct StudentEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_on: Date,
    pub course_name: String,
    pub course_description: Option<String>,
    pub course_workload_hours: i32,
}

/// One enrollment in a given course, with student details.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct CourseEnrollment {
    pub student_id: DbId,
    pub course_id: DbId,
    pub enrolled_on: Date,
    pub student_name: String,
    pub student_email: String,
}

/// An enrollment with the full student and course rows.
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentDetails {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub student: Student,
    pub course: Course,
}
