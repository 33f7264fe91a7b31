//! Request handlers, one module per resource.
//!
//! Each handler validates its input, issues repository calls in order,
//! passes records through the resource's view when one is configured and
//! wraps the result in [`crate::response::DataResponse`].

pub mod address;
pub mod course;
pub mod enrollment;
pub mod student;
pub mod user;
