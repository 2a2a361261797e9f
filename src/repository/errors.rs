use diesel::r2d2::{Error as R2D2Error, PoolError};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Failures surfaced by the SQLite repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    /// A referenced customer does not exist (foreign key failure).
    #[error("missing referenced record: {0}")]
    MissingReference(String),

    /// Unique, check or not-null constraint rejected the write.
    #[error("conflicting data: {0}")]
    Conflict(String),

    #[error("invalid data: {0}")]
    Validation(String),

    #[error("database unavailable: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("{0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::ForeignKeyViolation => {
                        RepositoryError::MissingReference(message)
                    }
                    DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::CheckViolation
                    | DatabaseErrorKind::NotNullViolation => RepositoryError::Conflict(message),
                    _ => RepositoryError::Database(message),
                }
            }
            DieselError::DeserializationError(e) => {
                RepositoryError::Validation(format!("stored row does not decode: {e}"))
            }
            other => RepositoryError::Unexpected(other.to_string()),
        }
    }
}

impl From<R2D2Error> for RepositoryError {
    fn from(err: R2D2Error) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::Connection(err.to_string())
    }
}
