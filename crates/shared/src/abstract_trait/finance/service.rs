use crate::{
    domain::{
        requests::{CreateExchangeRateRequest, FinanceSummaryRequest, UpdateExchangeRateRequest},
        responses::{ApiResponse, ExchangeRateIdResponse, MonthSummaryResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFinanceService = Arc<dyn FinanceServiceTrait + Send + Sync>;

#[async_trait]
pub trait FinanceServiceTrait {
    async fn finance_summary(
        &self,
        req: &FinanceSummaryRequest,
    ) -> Result<ApiResponse<Vec<MonthSummaryResponse>>, ServiceError>;
    async fn create_exchange_rate(
        &self,
        req: &CreateExchangeRateRequest,
    ) -> Result<ApiResponse<ExchangeRateIdResponse>, ServiceError>;
    async fn update_exchange_rate(
        &self,
        id: u64,
        req: &UpdateExchangeRateRequest,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
