//! Outcome taxonomy of the service facade.
//!
//! Every facade operation fails with exactly one [`ServiceError`] variant.
//! Data-layer errors are classified by the `From<DbError>` impl: a missing
//! player becomes [`ServiceError::NotFound`], a rejected swap becomes
//! [`ServiceError::Consistency`], and everything else is a store failure.

use std::time::Duration;

use roster_db::DbError;

/// Errors returned by [`RosterService`](crate::service::RosterService).
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request input was rejected before reaching the store.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The addressed player does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A swap precondition did not hold; nothing was changed.
    #[error("consistency violation: {0}")]
    Consistency(String),

    /// The store failed to read or write.
    #[error("store error: {0}")]
    Store(#[source] DbError),

    /// The store did not answer within the request deadline.
    #[error("store call exceeded the {}ms deadline", .0.as_millis())]
    Timeout(Duration),
}

impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::PlayerNotFound(_) => Self::NotFound(err.to_string()),
            DbError::SwapRejected { .. } => Self::Consistency(err.to_string()),
            other => Self::Store(other),
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
