use crate::{errors::RepositoryError, model::finance::FinanceSummaryRow};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;

pub type DynFinanceRepository = Arc<dyn FinanceRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait FinanceRepositoryTrait {
    async fn summary(
        &self,
        month: Option<u32>,
        year: i32,
        currency_id: Option<i64>,
    ) -> Result<Vec<FinanceSummaryRow>, RepositoryError>;
    async fn create_exchange_rate(
        &self,
        currency_id: i64,
        rate: Decimal,
    ) -> Result<u64, RepositoryError>;
    /// Returns affected rows.
    async fn update_exchange_rate(&self, id: u64, rate: Decimal) -> Result<u64, RepositoryError>;
}
