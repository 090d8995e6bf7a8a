use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Externally stable error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Conflict,
    InfrastructureFailure,
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(vec![message.into()])
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) => ErrorKind::InvalidInput,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::Conflict(_) => ErrorKind::Conflict,
            ServiceError::Internal(_) => ErrorKind::InfrastructureFailure,
            ServiceError::Repo(repo) => match repo {
                RepositoryError::NotFound(_) => ErrorKind::NotFound,
                RepositoryError::Conflict(_) => ErrorKind::Conflict,
                RepositoryError::ForeignKey(_) => ErrorKind::InvalidInput,
                RepositoryError::Engine(_) | RepositoryError::Infrastructure { .. } => {
                    ErrorKind::InfrastructureFailure
                }
            },
        }
    }

    /// Message safe to hand to an external caller. Infrastructure failures
    /// never carry engine detail.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Validation(errors) => errors.join("; "),
            ServiceError::NotFound(msg) | ServiceError::Conflict(msg) => msg.clone(),
            ServiceError::Repo(
                RepositoryError::NotFound(msg)
                | RepositoryError::Conflict(msg)
                | RepositoryError::ForeignKey(msg),
            ) => msg.clone(),
            ServiceError::Internal(_)
            | ServiceError::Repo(RepositoryError::Engine(_))
            | ServiceError::Repo(RepositoryError::Infrastructure { .. }) => {
                "Internal server error".to_string()
            }
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::Repo(repo) if repo.is_transient())
    }
}
