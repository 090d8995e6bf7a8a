use crate::{
    domain::requests::Patch,
    utils::validation::{patch_positive, patch_positive_id, patch_service_amount, positive, service_amount},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A service attached when a trip is created, or on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServiceLine {
    #[serde(rename = "id")]
    #[validate(range(min = 1, message = "El tipo de servicio es obligatorio"))]
    pub service_type_id: i64,

    #[serde(rename = "valor")]
    #[validate(custom(function = "service_amount"))]
    pub amount: Decimal,

    #[serde(rename = "pagado_por")]
    #[validate(length(min = 1, message = "El pagador es obligatorio"))]
    pub paid_by: String,

    #[serde(rename = "moneda")]
    #[validate(range(min = 1, message = "La moneda es obligatoria"))]
    pub currency_id: i64,

    #[serde(rename = "valor_tasa_cambio", default)]
    #[validate(custom(function = "positive", message = "La tasa de cambio debe ser mayor a 0"))]
    pub exchange_rate: Option<Decimal>,
}

/// Partial update of one attached service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UpdateServiceLine {
    #[serde(rename = "valor", default)]
    #[validate(custom(function = "patch_service_amount"))]
    pub amount: Patch<Decimal>,

    #[serde(rename = "pagado_por", default)]
    pub paid_by: Patch<String>,

    #[serde(rename = "moneda", default)]
    #[validate(custom(function = "patch_positive_id"))]
    pub currency_id: Patch<i64>,

    #[serde(rename = "valor_tasa_cambio", default)]
    #[validate(custom(function = "patch_positive"))]
    pub exchange_rate: Patch<Decimal>,
}

/// Service line inside a trip update: which attached service, and what changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TripServiceUpdate {
    #[serde(rename = "id")]
    #[validate(range(min = 1, message = "El tipo de servicio es obligatorio"))]
    pub service_type_id: i64,

    #[serde(flatten)]
    #[validate(nested)]
    pub changes: UpdateServiceLine,
}
