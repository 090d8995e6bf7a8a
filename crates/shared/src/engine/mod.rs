//! Adapter over the aggregation engine: the relational store and its stored
//! procedures. Repositories only see the traits in this module, never sqlx.

mod mysql;
mod param;
mod result;

pub use self::mysql::MySqlEngine;
pub use self::param::Param;
pub use self::result::{ResultBundle, ResultSet, Row};

use crate::errors::EngineError;
use async_trait::async_trait;
use std::sync::Arc;

/// Borrowed handle to a live connection, as handed to executor operations and
/// transaction steps.
pub type ConnRef<'a> = &'a mut (dyn EngineConnection + 'static);

pub type DynEngine = Arc<dyn Engine + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub last_insert_id: u64,
    pub rows_affected: u64,
}

#[async_trait]
pub trait EngineConnection: Send {
    /// `CALL procedure(?, ...)`, returning every result set in delivery order.
    async fn call(&mut self, procedure: &str, params: &[Param])
    -> Result<ResultBundle, EngineError>;

    async fn query(&mut self, statement: &str, params: &[Param]) -> Result<ResultSet, EngineError>;

    async fn execute(
        &mut self,
        statement: &str,
        params: &[Param],
    ) -> Result<ExecOutcome, EngineError>;

    /// Commits and gives the connection back to the pool. A no-op commit on a
    /// connection that never began a transaction.
    async fn commit(self: Box<Self>) -> Result<(), EngineError>;

    async fn rollback(self: Box<Self>) -> Result<(), EngineError>;

    async fn release(self: Box<Self>);
}

#[async_trait]
pub trait Engine {
    /// Plain autocommit connection.
    async fn acquire(&self) -> Result<Box<dyn EngineConnection>, EngineError>;

    /// Connection with an open transaction.
    async fn begin(&self) -> Result<Box<dyn EngineConnection>, EngineError>;
}
