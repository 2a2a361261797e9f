//! Business workflows invoked by the HTTP routes and binaries.

use thiserror::Error;

use crate::render::RenderError;
use crate::repository::errors::RepositoryError;
use crate::storage::StorageError;

pub mod main;
pub mod reports;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("repository error: {0}")]
    Repository(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound | RepositoryError::MissingReference(_) => {
                ServiceError::NotFound
            }
            RepositoryError::Validation(msg) => ServiceError::TypeConstraint(msg),
            RepositoryError::Conflict(msg) => ServiceError::Conflict(msg),
            other => ServiceError::Repository(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_service_errors() {
        assert!(matches!(
            ServiceError::from(RepositoryError::MissingReference("customer".into())),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::Conflict("duplicate email".into())),
            ServiceError::Conflict(_)
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::Validation("bad".into())),
            ServiceError::TypeConstraint(_)
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::Connection("timeout".into())),
            ServiceError::Repository(_)
        ));
    }
}
