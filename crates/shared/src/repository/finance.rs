use crate::{
    abstract_trait::finance::repository::FinanceRepositoryTrait,
    engine::Param,
    errors::RepositoryError,
    executor::QueryExecutor,
    model::finance::FinanceSummaryRow,
};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

const FINANCE_SUMMARY: &str = "resumen_financiero";
const INSERT_RATE: &str = "INSERT INTO tipo_cambio(fecha, moneda_id, valor_base) VALUES (NOW(), ?, ?)";
const UPDATE_RATE: &str = "UPDATE tipo_cambio SET valor_base = ? WHERE id = ?";

pub struct FinanceRepository {
    executor: QueryExecutor,
}

impl FinanceRepository {
    pub fn new(executor: QueryExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl FinanceRepositoryTrait for FinanceRepository {
    async fn summary(
        &self,
        month: Option<u32>,
        year: i32,
        currency_id: Option<i64>,
    ) -> Result<Vec<FinanceSummaryRow>, RepositoryError> {
        let params = vec![
            Param::from(month.map(i64::from)),
            Param::from(year),
            Param::from(currency_id),
        ];

        self.executor
            .fetch_all(None, FINANCE_SUMMARY, params)
            .await
    }

    async fn create_exchange_rate(
        &self,
        currency_id: i64,
        rate: Decimal,
    ) -> Result<u64, RepositoryError> {
        self.executor
            .insert(None, INSERT_RATE, vec![Param::from(currency_id), Param::from(rate)])
            .await
    }

    async fn update_exchange_rate(&self, id: u64, rate: Decimal) -> Result<u64, RepositoryError> {
        let id = i64::try_from(id)
            .map_err(|_| RepositoryError::NotFound(format!("Exchange rate {id} not found")))?;

        self.executor
            .execute(None, UPDATE_RATE, vec![Param::from(rate), Param::from(id)])
            .await
    }
}
