//! Output projections for every resource that carries personal data.
//!
//! Built once at startup from the configured mask policy and shared through
//! [`crate::state::AppState`]. Resources without personal data (addresses,
//! courses, plain enrollments) are serialized as-is.

use campus_core::masking::MaskPolicy;
use campus_core::view::ViewSpec;

/// View specs keyed by response shape.
#[derive(Debug, Clone)]
pub struct Views {
    /// `Student` and `StudentWithAddresses`.
    pub student: ViewSpec,
    /// `User`.
    pub user: ViewSpec,
    /// `CourseWithStudents`: each enrolled student is masked.
    pub course_with_students: ViewSpec,
    /// `CourseEnrollment`: the joined student email is masked.
    pub course_enrollment: ViewSpec,
    /// `EnrollmentDetails`: the embedded student is masked.
    pub enrollment_details: ViewSpec,
}

impl Views {
    pub fn new(email: MaskPolicy) -> Self {
        let student = ViewSpec::new().mask("email", email.clone());
        Self {
            user: ViewSpec::new().mask("email", email.clone()),
            course_with_students: ViewSpec::new().nested("students", student.clone()),
            course_enrollment: ViewSpec::new().mask("student_email", email),
            enrollment_details: ViewSpec::new().nested("student", student.clone()),
            student,
        }
    }
}

impl Default for Views {
    fn default() -> Self {
        Self::new(MaskPolicy::default())
    }
}
