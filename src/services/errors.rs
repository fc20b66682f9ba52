use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Errors surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Resource not found")]
    NotFound,

    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => {
                ServiceError::IntegrityViolation(message)
            }
            other => ServiceError::Repository(other.to_string()),
        }
    }
}
