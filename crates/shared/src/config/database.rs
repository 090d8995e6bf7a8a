use anyhow::{Context, Result};
use sqlx::{MySql, Pool, mysql::MySqlPoolOptions};
use std::time::Duration;
use tracing::info;

pub type ConnectionPool = Pool<MySql>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(connection_string: &str, max_connections: u32) -> Result<ConnectionPool> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .connect(connection_string)
            .await
            .context("Failed to connect to MySQL")?;

        info!("🗄️ MySQL pool ready (max_connections={max_connections})");

        Ok(pool)
    }
}
