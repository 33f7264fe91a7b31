//! Course entity model and DTOs.

use campus_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `courses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub workload_hours: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new course.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCourse {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub workload_hours: i32,
}

/// DTO for updating a course. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(range(min = 1))]
    pub workload_hours: Option<i32>,
}

/// A student enrolled in a course, with the date of enrollment.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct EnrolledStudent {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub birth_date: Option<Date>,
    pub enrollment_number: Option<String>,
    pub enrolled_on: Date,
}

/// A course together with its enrolled students.
#[derive(Debug, Clone, Serialize)]
pub struct CourseWithStudents {
    #[serde(flatten)]
    pub course: Course,
    pub students: Vec<EnrolledStudent>,
}
