//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO listing required fields
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod address;
pub mod course;
pub mod enrollment;
pub mod student;
pub mod user;
