use crate::{
    engine::{ConnRef, DynEngine},
    errors::{RepositoryError, ServiceError},
};
use futures::future::BoxFuture;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Future returned by one transactional step sequence.
pub type StepFuture<'c, T, E> = BoxFuture<'c, Result<T, E>>;

/// Errors that may succeed when the whole unit is replayed.
pub trait TransientError {
    fn is_transient(&self) -> bool;
}

impl TransientError for RepositoryError {
    fn is_transient(&self) -> bool {
        RepositoryError::is_transient(self)
    }
}

impl TransientError for ServiceError {
    fn is_transient(&self) -> bool {
        ServiceError::is_transient(self)
    }
}

/// Capped exponential delay between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub base: Duration,
    pub cap: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(50),
            cap: Duration::from_secs(1),
        }
    }
}

impl Backoff {
    /// Delay after the given failed attempt (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base.saturating_mul(1 << exponent).min(self.cap)
    }
}

/// Runs step sequences as one atomic unit on a single connection.
#[derive(Clone)]
pub struct TransactionManager {
    engine: DynEngine,
    backoff: Backoff,
}

impl TransactionManager {
    pub fn new(engine: DynEngine) -> Self {
        Self::with_backoff(engine, Backoff::default())
    }

    pub fn with_backoff(engine: DynEngine, backoff: Backoff) -> Self {
        Self { engine, backoff }
    }

    /// Begins a unit, runs `steps` on its connection and commits. Any error
    /// rolls the unit back. The connection is released exactly once either way.
    pub async fn execute<T, E, F>(&self, steps: F) -> Result<T, E>
    where
        T: Send,
        E: From<RepositoryError> + Send,
        F: for<'c> FnOnce(ConnRef<'c>) -> StepFuture<'c, T, E> + Send,
    {
        let started = Instant::now();

        let mut conn = self.engine.begin().await.map_err(|cause| {
            error!("❌ Failed to begin transaction: {cause:?}");
            E::from(RepositoryError::Infrastructure {
                description: "Failed to begin transaction".to_string(),
                cause,
            })
        })?;

        let outcome = steps(&mut *conn).await;

        match outcome {
            Ok(value) => {
                conn.commit().await.map_err(|cause| {
                    error!("❌ Failed to commit transaction: {cause:?}");
                    E::from(RepositoryError::Infrastructure {
                        description: "Failed to commit transaction".to_string(),
                        cause,
                    })
                })?;

                debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "✅ Transaction committed"
                );
                Ok(value)
            }
            Err(err) => {
                if let Err(cause) = conn.rollback().await {
                    error!("❌ Failed to roll back transaction: {cause:?}");
                }

                warn!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "↩️ Transaction rolled back"
                );
                Err(err)
            }
        }
    }

    /// Like [`execute`](Self::execute), replaying the whole unit in a fresh
    /// transaction while it fails with a transient error and attempts remain.
    /// Non-transient errors are returned immediately.
    pub async fn execute_with_retry<T, E, F>(&self, max_attempts: u32, steps: F) -> Result<T, E>
    where
        T: Send,
        E: From<RepositoryError> + TransientError + Send,
        F: for<'c> Fn(ConnRef<'c>) -> StepFuture<'c, T, E> + Send + Sync,
    {
        let max_attempts = max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match self.execute(&steps).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < max_attempts => {
                    let delay = self.backoff.delay(attempt);
                    warn!(
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "🔁 Transient contention, replaying transaction"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
