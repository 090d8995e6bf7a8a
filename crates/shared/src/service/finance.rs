use crate::{
    abstract_trait::finance::{repository::DynFinanceRepository, service::FinanceServiceTrait},
    config::ValidationConfig,
    domain::{
        requests::{CreateExchangeRateRequest, FinanceSummaryRequest, UpdateExchangeRateRequest},
        responses::{
            ApiResponse, CurrencySummaryResponse, ExchangeRateIdResponse, MonthSummaryResponse,
        },
    },
    errors::{ServiceError, format_validation_errors},
    model::finance::FinanceSummaryRow,
    utils::validation::validate_year,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub struct FinanceService {
    repository: DynFinanceRepository,
    validation: ValidationConfig,
}

impl FinanceService {
    pub fn new(repository: DynFinanceRepository, validation: ValidationConfig) -> Self {
        Self {
            repository,
            validation,
        }
    }
}

fn month_name(month: u32) -> String {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .map_or_else(|| month.to_string(), |name| name.to_string())
}

/// Folds (month, currency) rows into month buckets, keeping the order rows
/// arrive in. Missing income or expense counts as zero. Profit is taken from
/// the row; rows without one get income minus expense.
pub fn group_by_month(rows: Vec<FinanceSummaryRow>) -> Vec<MonthSummaryResponse> {
    let mut months: Vec<MonthSummaryResponse> = Vec::new();

    for row in rows {
        let ingreso = row.ingreso.unwrap_or_default();
        let egreso = row.egreso.unwrap_or_default();
        let entry = CurrencySummaryResponse {
            ganancia: row.ganancia.unwrap_or(ingreso - egreso),
            moneda: row.moneda,
            ingreso,
            egreso,
        };

        match months.iter_mut().find(|m| m.mes_num == row.mes_num) {
            Some(month) => month.resumen.push(entry),
            None => months.push(MonthSummaryResponse {
                mes: row.mes.unwrap_or_else(|| month_name(row.mes_num)),
                mes_num: row.mes_num,
                resumen: vec![entry],
            }),
        }
    }

    months
}

#[async_trait]
impl FinanceServiceTrait for FinanceService {
    async fn finance_summary(
        &self,
        req: &FinanceSummaryRequest,
    ) -> Result<ApiResponse<Vec<MonthSummaryResponse>>, ServiceError> {
        let mut errors = match req.validate() {
            Ok(()) => Vec::new(),
            Err(e) => format_validation_errors(&e),
        };
        errors.extend(validate_year(req.year, self.validation.min_finance_year).err());
        if !errors.is_empty() {
            error!("❌ Finance summary rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "📊 Finance summary | Year: {}, Month: {:?}, Currency: {:?}",
            req.year, req.month, req.currency_id
        );

        let rows = self
            .repository
            .summary(req.month, req.year, req.currency_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch finance summary: {e:?}");
                ServiceError::from(e)
            })?;

        let months = group_by_month(rows);

        info!("✅ Finance summary covers {} months", months.len());

        Ok(ApiResponse::success(
            "Finance summary retrieved successfully",
            months,
        ))
    }

    async fn create_exchange_rate(
        &self,
        req: &CreateExchangeRateRequest,
    ) -> Result<ApiResponse<ExchangeRateIdResponse>, ServiceError> {
        if let Err(e) = req.validate() {
            let errors = format_validation_errors(&e);
            error!("❌ Exchange rate rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "💱 Creating exchange rate for currency {} = {}",
            req.currency_id, req.rate
        );

        let id = self
            .repository
            .create_exchange_rate(req.currency_id, req.rate)
            .await
            .map_err(|e| {
                error!("❌ Failed to create exchange rate: {e:?}");
                ServiceError::from(e)
            })?;

        Ok(ApiResponse::success(
            "Exchange rate created successfully",
            ExchangeRateIdResponse { id },
        ))
    }

    async fn update_exchange_rate(
        &self,
        id: u64,
        req: &UpdateExchangeRateRequest,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let mut errors = match req.validate() {
            Ok(()) => Vec::new(),
            Err(e) => format_validation_errors(&e),
        };
        if id == 0 {
            errors.push("id: debe ser mayor a 0".to_string());
        }
        if !errors.is_empty() {
            error!("❌ Exchange rate update rejected: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("💱 Updating exchange rate {id} = {}", req.rate);

        let affected = self
            .repository
            .update_exchange_rate(id, req.rate)
            .await
            .map_err(|e| {
                error!("❌ Failed to update exchange rate {id}: {e:?}");
                ServiceError::from(e)
            })?;

        if affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Tipo de cambio {id} no encontrado"
            )));
        }

        Ok(ApiResponse::success("Exchange rate updated successfully", ()))
    }
}
