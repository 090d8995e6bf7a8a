use crate::errors::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    ForeignKey(String),

    /// Raw engine failure that the executor has not classified yet.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Unclassified failure wrapped by the executor. Only `description` is
    /// displayed; `cause` stays available through `source()` for logs.
    #[error("{description}")]
    Infrastructure {
        description: String,
        #[source]
        cause: EngineError,
    },
}

impl RepositoryError {
    pub fn is_transient(&self) -> bool {
        match self {
            RepositoryError::Engine(cause) | RepositoryError::Infrastructure { cause, .. } => {
                cause.is_transient()
            }
            _ => false,
        }
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        RepositoryError::Engine(EngineError::Sqlx(err))
    }
}
