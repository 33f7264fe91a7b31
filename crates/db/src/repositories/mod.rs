//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every value reaches the
//! store as a bound parameter; no input is formatted into query text.
//!
//! Lookups, updates and deletes by id return `Ok(None)` when no row
//! matches, never an error.

pub mod address_repo;
pub mod course_repo;
pub mod enrollment_repo;
pub mod student_repo;
pub mod user_repo;

pub use address_repo::AddressRepo;
pub use course_repo::CourseRepo;
pub use enrollment_repo::EnrollmentRepo;
pub use student_repo::StudentRepo;
pub use user_repo::UserRepo;
