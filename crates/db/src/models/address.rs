//! Address entity model and DTOs. Every address belongs to one student.

use campus_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `addresses` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Address {
    pub id: DbId,
    pub student_id: DbId,
    pub street: String,
    pub number: Option<i32>,
    pub city: String,
    pub state: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new address.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAddress {
    pub student_id: DbId,
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    #[validate(range(min = 0))]
    pub number: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// Two-letter state code, e.g. `"MG"`.
    #[validate(length(equal = 2))]
    pub state: String,
}

/// DTO for updating an address. The owning student cannot change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAddress {
    #[validate(length(min = 1, max = 200))]
    pub street: Option<String>,
    #[validate(range(min = 0))]
    pub number: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(equal = 2))]
    pub state: Option<String>,
}
