use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub is_dev: bool,
    /// Attempts per write unit; 1 disables retry on lock contention.
    pub tx_max_attempts: u32,
    pub validation: ValidationConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;

        let max_connections = env_or("DB_MAX_CONNECTIONS", 10u32)?;
        if max_connections == 0 {
            return Err(anyhow!("DB_MAX_CONNECTIONS must be greater than 0"));
        }

        let is_dev = std::env::var("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case("development"))
            .unwrap_or(false);

        let tx_max_attempts = env_or("TX_MAX_ATTEMPTS", 1u32)?.max(1);

        Ok(Self {
            database_url,
            max_connections,
            is_dev,
            tx_max_attempts,
            validation: ValidationConfig::from_env()?,
        })
    }
}

/// Bounds applied by the orchestration services before anything reaches the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    pub default_limit: i64,
    pub min_limit: i64,
    pub max_limit: i64,
    pub max_filter_length: usize,
    pub min_trip_year: i32,
    pub min_finance_year: i32,
    pub payers: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            min_limit: 1,
            max_limit: 100,
            max_filter_length: 100,
            min_trip_year: 2000,
            min_finance_year: 2025,
            payers: ["mariana", "pablo", "soledad", "pendiente"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ValidationConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_limit = env_or("PAGINATION_MAX_LIMIT", defaults.max_limit)?;
        if max_limit < defaults.min_limit {
            return Err(anyhow!(
                "PAGINATION_MAX_LIMIT must be at least {}",
                defaults.min_limit
            ));
        }

        let default_limit = env_or("PAGINATION_DEFAULT_LIMIT", defaults.default_limit)?
            .clamp(defaults.min_limit, max_limit);

        let payers = match std::env::var("SERVICE_PAYERS") {
            Ok(raw) => parse_payers(&raw)?,
            Err(_) => defaults.payers,
        };

        Ok(Self {
            default_limit,
            min_limit: defaults.min_limit,
            max_limit,
            max_filter_length: env_or("FILTER_MAX_LENGTH", defaults.max_filter_length)?,
            min_trip_year: env_or("MIN_TRIP_YEAR", defaults.min_trip_year)?,
            min_finance_year: env_or("MIN_FINANCE_YEAR", defaults.min_finance_year)?,
            payers,
        })
    }

    pub fn is_known_payer(&self, payer: &str) -> bool {
        self.payers.iter().any(|p| p == payer)
    }
}

fn parse_payers(raw: &str) -> Result<Vec<String>> {
    let payers: Vec<String> = raw
        .split(',')
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect();

    if payers.is_empty() {
        return Err(anyhow!("SERVICE_PAYERS must list at least one payer"));
    }

    Ok(payers)
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
