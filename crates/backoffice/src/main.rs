use anyhow::{Context, Result};
use backoffice::di::DependenciesInject;
use shared::{
    config::{Config, ConnectionManager},
    engine::{DynEngine, MySqlEngine},
    utils::Logger,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger = Logger::new("backoffice", config.is_dev);

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database pool")?;

    let engine = Arc::new(MySqlEngine::new(db_pool.clone())) as DynEngine;
    let deps = DependenciesInject::new(engine, &config);

    match deps.trip_service.list_service_catalog().await {
        Ok(catalog) => info!(
            "✅ Back-office core ready, {} service types in catalog",
            catalog.data.len()
        ),
        Err(e) => warn!("⚠️ Catalog warm-up failed, continuing: {e}"),
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("🛑 Shutdown signal received."),
        Err(e) => error!("Failed to listen for shutdown signal: {e}"),
    }

    db_pool.close().await;

    info!("✅ Back-office shutdown complete.");
    Ok(())
}
