use super::{Engine, EngineConnection, ExecOutcome, Param, ResultBundle, ResultSet, Row};
use crate::{config::ConnectionPool, errors::EngineError};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use futures::TryStreamExt;
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use sqlx::{
    Column, Either, Row as _, Transaction, TypeInfo,
    mysql::{MySql, MySqlArguments, MySqlConnection, MySqlRow},
    pool::PoolConnection,
    query::Query,
};
use tracing::{debug, error};

pub struct MySqlEngine {
    db: ConnectionPool,
}

impl MySqlEngine {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Engine for MySqlEngine {
    async fn acquire(&self) -> Result<Box<dyn EngineConnection>, EngineError> {
        let conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            EngineError::from(e)
        })?;

        Ok(Box::new(MySqlSession {
            handle: Handle::Pooled(conn),
        }))
    }

    async fn begin(&self) -> Result<Box<dyn EngineConnection>, EngineError> {
        let tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            EngineError::from(e)
        })?;

        Ok(Box::new(MySqlSession {
            handle: Handle::Transaction(tx),
        }))
    }
}

enum Handle {
    Pooled(PoolConnection<MySql>),
    Transaction(Transaction<'static, MySql>),
}

/// A pooled connection, optionally inside a transaction. Dropping it hands
/// the connection back to the pool; an uncommitted transaction is rolled back
/// by sqlx on drop.
pub struct MySqlSession {
    handle: Handle,
}

impl MySqlSession {
    fn conn(&mut self) -> &mut MySqlConnection {
        match &mut self.handle {
            Handle::Pooled(conn) => &mut **conn,
            Handle::Transaction(tx) => &mut **tx,
        }
    }
}

#[async_trait]
impl EngineConnection for MySqlSession {
    // `fetch_many` is the only sqlx entry point that surfaces result-set
    // boundaries, which `CALL` relies on.
    #[allow(deprecated)]
    async fn call(
        &mut self,
        procedure: &str,
        params: &[Param],
    ) -> Result<ResultBundle, EngineError> {
        let placeholders = vec!["?"; params.len()].join(", ");
        let statement = format!("CALL {procedure}({placeholders})");

        debug!(procedure, params = params.len(), "Executing stored procedure");

        let mut stream = bind_params(sqlx::query(&statement), params).fetch_many(self.conn());

        let mut sets = Vec::new();
        let mut current: Vec<Row> = Vec::new();
        let mut rows_affected = 0;

        while let Some(step) = stream.try_next().await? {
            match step {
                Either::Left(done) => {
                    rows_affected += done.rows_affected();
                    sets.push(ResultSet::new(std::mem::take(&mut current)));
                }
                Either::Right(row) => current.push(row_to_json(&row)?),
            }
        }

        if !current.is_empty() {
            sets.push(ResultSet::new(current));
        }

        Ok(ResultBundle::new(sets, rows_affected))
    }

    async fn query(&mut self, statement: &str, params: &[Param]) -> Result<ResultSet, EngineError> {
        let rows = bind_params(sqlx::query(statement), params)
            .fetch_all(self.conn())
            .await?;

        let rows = rows
            .iter()
            .map(row_to_json)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResultSet::new(rows))
    }

    async fn execute(
        &mut self,
        statement: &str,
        params: &[Param],
    ) -> Result<ExecOutcome, EngineError> {
        let done = bind_params(sqlx::query(statement), params)
            .execute(self.conn())
            .await?;

        Ok(ExecOutcome {
            last_insert_id: done.last_insert_id(),
            rows_affected: done.rows_affected(),
        })
    }

    async fn commit(self: Box<Self>) -> Result<(), EngineError> {
        let MySqlSession { handle } = *self;
        match handle {
            Handle::Transaction(tx) => tx.commit().await.map_err(EngineError::from),
            Handle::Pooled(_) => Ok(()),
        }
    }

    async fn rollback(self: Box<Self>) -> Result<(), EngineError> {
        let MySqlSession { handle } = *self;
        match handle {
            Handle::Transaction(tx) => tx.rollback().await.map_err(EngineError::from),
            Handle::Pooled(_) => Ok(()),
        }
    }

    async fn release(self: Box<Self>) {
        drop(self);
    }
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[Param],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            Param::Null => query.bind(None::<String>),
            Param::Int(v) => query.bind(*v),
            Param::Decimal(v) => query.bind(*v),
            Param::Text(v) => query.bind(v.clone()),
            Param::Date(v) => query.bind(*v),
        };
    }
    query
}

fn row_to_json(row: &MySqlRow) -> Result<Row, EngineError> {
    let mut out = Row::new();
    for column in row.columns() {
        let value = decode_column(row, column.ordinal(), column.type_info().name())?;
        out.insert(column.name().to_string(), value);
    }
    Ok(out)
}

fn decode_column(row: &MySqlRow, index: usize, type_name: &str) -> Result<Value, sqlx::Error> {
    let value = match type_name {
        "NULL" => None,
        "BOOLEAN" => row.try_get::<Option<bool>, _>(index)?.map(Value::Bool),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<Option<i64>, _>(index)?.map(Value::from)
        }
        name if name.ends_with("UNSIGNED") => {
            row.try_get::<Option<u64>, _>(index)?.map(Value::from)
        }
        // Decimals travel as strings so no precision is lost on the way to
        // `rust_decimal`.
        "DECIMAL" => row
            .try_get::<Option<Decimal>, _>(index)?
            .map(|d| Value::String(d.to_string())),
        "FLOAT" | "DOUBLE" => row
            .try_get::<Option<f64>, _>(index)?
            .and_then(Number::from_f64)
            .map(Value::Number),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)?
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string())),
        "DATETIME" | "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)?
            .map(|d| Value::String(d.format("%Y-%m-%dT%H:%M:%S").to_string())),
        "JSON" => row.try_get::<Option<Value>, _>(index)?,
        _ => row
            .try_get_unchecked::<Option<String>, _>(index)?
            .map(Value::String),
    };

    Ok(value.unwrap_or(Value::Null))
}
