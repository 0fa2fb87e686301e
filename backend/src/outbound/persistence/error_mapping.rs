//! Diesel and pool error mapping for the submission repository.

use tracing::debug;

use crate::domain::ports::SubmissionRepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> SubmissionRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            SubmissionRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors.
///
/// Only a closed connection counts as a connection failure; everything else
/// is reported as a query failure with a generic message. The Diesel error is
/// logged at debug level.
pub(crate) fn map_diesel_error(error: diesel::result::Error) -> SubmissionRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            SubmissionRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            SubmissionRepositoryError::query("submission violates a table constraint")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            SubmissionRepositoryError::query("duplicate submission id")
        }
        DieselError::NotFound => SubmissionRepositoryError::query("record not found"),
        _ => SubmissionRepositoryError::query("database error"),
    }
}
