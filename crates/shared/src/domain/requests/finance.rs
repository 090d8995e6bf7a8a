use crate::utils::validation::positive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FinanceSummaryRequest {
    #[serde(rename = "anio")]
    pub year: i32,

    #[serde(rename = "mes", default)]
    #[validate(range(min = 1, max = 12, message = "El mes debe estar entre 1 y 12"))]
    pub month: Option<u32>,

    #[serde(rename = "moneda", default)]
    #[validate(range(min = 1, message = "Moneda inválida"))]
    pub currency_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExchangeRateRequest {
    #[serde(rename = "moneda")]
    #[validate(range(min = 1, message = "La moneda es obligatoria"))]
    pub currency_id: i64,

    #[serde(rename = "valor_base")]
    #[validate(custom(function = "positive", message = "El valor debe ser mayor a 0"))]
    pub rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateExchangeRateRequest {
    #[serde(rename = "valor")]
    #[validate(custom(function = "positive", message = "El valor debe ser mayor a 0"))]
    pub rate: Decimal,
}
