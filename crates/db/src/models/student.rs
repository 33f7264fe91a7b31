//! Student entity model and DTOs.

use campus_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::address::Address;

/// A row from the `students` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub birth_date: Option<Date>,
    pub enrollment_number: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new student. `name` and `email` are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub birth_date: Option<Date>,
    #[validate(length(min = 1, max = 50))]
    pub enrollment_number: Option<String>,
}

/// DTO for updating an existing student. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub birth_date: Option<Date>,
    #[validate(length(min = 1, max = 50))]
    pub enrollment_number: Option<String>,
}

/// A student together with all of its addresses.
#[derive(Debug, Clone, Serialize)]
pub struct StudentWithAddresses {
    #[serde(flatten)]
    pub student: Student,
    pub addresses: Vec<Address>,
}
