//! Mapping from driver errors to the shared failure taxonomy.

use campus_core::error::CoreError;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;

/// Classify a sqlx error into a [`CoreError`].
///
/// - Unique, foreign-key, not-null and check violations become
///   [`CoreError::ConstraintViolation`] carrying only the constraint name.
/// - Pool acquisition timeouts become [`CoreError::Timeout`].
/// - I/O, TLS, protocol and closed-pool failures become [`CoreError::Unavailable`].
/// - Everything else is [`CoreError::Internal`].
///
/// Raw driver text is kept only in `Internal`, which the transport layer
/// never forwards to callers.
pub fn classify_error(err: &sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            match db_err.kind() {
                ErrorKind::UniqueViolation => CoreError::ConstraintViolation(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                )),
                ErrorKind::ForeignKeyViolation => CoreError::ConstraintViolation(format!(
                    "Referenced record does not exist or is still referenced: {constraint}"
                )),
                ErrorKind::NotNullViolation => CoreError::ConstraintViolation(format!(
                    "Required field is missing: {}",
                    db_err
                        .try_downcast_ref::<PgDatabaseError>()
                        .and_then(PgDatabaseError::column)
                        .unwrap_or("unknown")
                )),
                ErrorKind::CheckViolation => CoreError::ConstraintViolation(format!(
                    "Value violates check constraint: {constraint}"
                )),
                _ => CoreError::Internal(db_err.to_string()),
            }
        }
        sqlx::Error::PoolTimedOut => {
            CoreError::Timeout("Timed out waiting for a database connection".to_string())
        }
        sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::WorkerCrashed => {
            tracing::warn!(error = %err, "Database unavailable");
            CoreError::Unavailable("The database is unavailable".to_string())
        }
        other => CoreError::Internal(other.to_string()),
    }
}
