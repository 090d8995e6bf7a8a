use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// MySQL error numbers for lock contention.
const ER_LOCK_WAIT_TIMEOUT: u16 = 1205;
const ER_LOCK_DEADLOCK: u16 = 1213;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("malformed engine result: {0}")]
    Decode(String),

    #[error("lock contention: {0}")]
    Contention(String),
}

impl EngineError {
    /// Deadlocks and lock wait timeouts; the whole unit may be replayed.
    pub fn is_transient(&self) -> bool {
        match self {
            EngineError::Contention(_) => true,
            EngineError::Sqlx(sqlx::Error::Database(db)) => {
                db.code().as_deref() == Some("40001")
                    || db
                        .try_downcast_ref::<MySqlDatabaseError>()
                        .is_some_and(|e| {
                            matches!(e.number(), ER_LOCK_WAIT_TIMEOUT | ER_LOCK_DEADLOCK)
                        })
            }
            _ => false,
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, EngineError::Sqlx(sqlx::Error::Database(db)) if db.is_unique_violation())
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            EngineError::Sqlx(sqlx::Error::Database(db)) if db.is_foreign_key_violation()
        )
    }
}
