use crate::types::DbId;

/// Failure taxonomy shared by every layer.
///
/// The data-access layer produces these from store errors; only the transport
/// layer turns them into external status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller supplied malformed or missing input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Uniqueness, foreign-key, not-null or check failure reported by the store.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The store (or another collaborator) could not be reached.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// A bounded wait expired, e.g. acquiring a pooled connection.
    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
