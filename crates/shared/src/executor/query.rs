use crate::{
    engine::{ConnRef, DynEngine, Param, ResultBundle},
    errors::RepositoryError,
};
use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, error, warn};

/// Future returned by an executor operation, borrowing the connection it runs on.
pub type OpFuture<'c, T> = BoxFuture<'c, Result<T, RepositoryError>>;

/// Runs single engine operations: times them, classifies failures and owns
/// the connection lifecycle when the caller did not bring one.
#[derive(Clone)]
pub struct QueryExecutor {
    engine: DynEngine,
}

impl QueryExecutor {
    pub fn new(engine: DynEngine) -> Self {
        Self { engine }
    }

    /// Runs `op` on the supplied connection, or on a freshly acquired one that
    /// is released before returning. A supplied connection is never released
    /// here; it belongs to the enclosing unit.
    pub async fn run<T, F>(
        &self,
        conn: Option<ConnRef<'_>>,
        description: &str,
        op: F,
    ) -> Result<T, RepositoryError>
    where
        T: Send,
        F: for<'c> FnOnce(ConnRef<'c>) -> OpFuture<'c, T> + Send,
    {
        let started = Instant::now();

        let result = match conn {
            Some(conn) => op(conn).await,
            None => match self.engine.acquire().await {
                Ok(mut owned) => {
                    let result = op(&mut *owned).await;
                    owned.release().await;
                    result
                }
                Err(e) => Err(RepositoryError::Engine(e)),
            },
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(value) => {
                debug!(operation = description, elapsed_ms, "✅ Query completed");
                Ok(value)
            }
            Err(err) => {
                let err = classify(description, err);
                match &err {
                    RepositoryError::Infrastructure { cause, .. } => {
                        error!(operation = description, elapsed_ms, "❌ Query failed: {cause:?}");
                    }
                    other => {
                        warn!(operation = description, elapsed_ms, "⚠️ Query rejected: {other}");
                    }
                }
                Err(err)
            }
        }
    }

    /// Every result set a procedure produced.
    pub async fn fetch_result_sets(
        &self,
        conn: Option<ConnRef<'_>>,
        procedure: &'static str,
        params: Vec<Param>,
    ) -> Result<ResultBundle, RepositoryError> {
        self.run(conn, &describe(procedure), move |conn| {
            Box::pin(async move { Ok(conn.call(procedure, &params).await?) })
        })
        .await
    }

    /// Rows of the first result set produced by a procedure.
    pub async fn fetch_all<T>(
        &self,
        conn: Option<ConnRef<'_>>,
        procedure: &'static str,
        params: Vec<Param>,
    ) -> Result<Vec<T>, RepositoryError>
    where
        T: DeserializeOwned + Send,
    {
        self.run(conn, &describe(procedure), move |conn| {
            Box::pin(async move {
                let bundle = conn.call(procedure, &params).await?;
                match bundle.first_set() {
                    Some(set) => Ok(set.decode()?),
                    None => Ok(Vec::new()),
                }
            })
        })
        .await
    }

    /// First row of the first result set. With `allow_empty` unset, an empty
    /// result is `NotFound`.
    pub async fn fetch_one<T>(
        &self,
        conn: Option<ConnRef<'_>>,
        procedure: &'static str,
        params: Vec<Param>,
        allow_empty: bool,
    ) -> Result<Option<T>, RepositoryError>
    where
        T: DeserializeOwned + Send,
    {
        self.run(conn, &describe(procedure), move |conn| {
            Box::pin(async move {
                let bundle = conn.call(procedure, &params).await?;
                let row = match bundle.first_set() {
                    Some(set) => set.decode_first()?,
                    None => None,
                };

                match row {
                    None if !allow_empty => {
                        Err(RepositoryError::NotFound("Record not found".to_string()))
                    }
                    row => Ok(row),
                }
            })
        })
        .await
    }

    /// Affected-row count reported by a procedure.
    pub async fn call_affected(
        &self,
        conn: Option<ConnRef<'_>>,
        procedure: &'static str,
        params: Vec<Param>,
    ) -> Result<u64, RepositoryError> {
        self.run(conn, &describe(procedure), move |conn| {
            Box::pin(async move { Ok(conn.call(procedure, &params).await?.rows_affected()) })
        })
        .await
    }

    /// Plain statement returning rows.
    pub async fn query_all<T>(
        &self,
        conn: Option<ConnRef<'_>>,
        statement: &'static str,
        params: Vec<Param>,
    ) -> Result<Vec<T>, RepositoryError>
    where
        T: DeserializeOwned + Send,
    {
        self.run(conn, &describe(statement), move |conn| {
            Box::pin(async move { Ok(conn.query(statement, &params).await?.decode()?) })
        })
        .await
    }

    /// Insert statement; returns the generated id.
    pub async fn insert(
        &self,
        conn: Option<ConnRef<'_>>,
        statement: &'static str,
        params: Vec<Param>,
    ) -> Result<u64, RepositoryError> {
        self.run(conn, &describe(statement), move |conn| {
            Box::pin(async move { Ok(conn.execute(statement, &params).await?.last_insert_id) })
        })
        .await
    }

    /// Write statement; returns affected rows. Zero is not an error here.
    pub async fn execute(
        &self,
        conn: Option<ConnRef<'_>>,
        statement: &'static str,
        params: Vec<Param>,
    ) -> Result<u64, RepositoryError> {
        self.run(conn, &describe(statement), move |conn| {
            Box::pin(async move { Ok(conn.execute(statement, &params).await?.rows_affected) })
        })
        .await
    }
}

fn describe(target: &str) -> String {
    let name = target.split_whitespace().take(3).collect::<Vec<_>>().join(" ");
    format!("Failed to execute {name}")
}

fn classify(description: &str, err: RepositoryError) -> RepositoryError {
    match err {
        RepositoryError::Engine(cause) if cause.is_unique_violation() => {
            RepositoryError::Conflict("Record already exists".to_string())
        }
        RepositoryError::Engine(cause) if cause.is_foreign_key_violation() => {
            RepositoryError::ForeignKey("Referenced record does not exist".to_string())
        }
        RepositoryError::Engine(cause) => RepositoryError::Infrastructure {
            description: description.to_string(),
            cause,
        },
        classified => classified,
    }
}
