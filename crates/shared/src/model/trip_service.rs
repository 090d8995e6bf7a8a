use super::de;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A service attached to a trip, as embedded in trip rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripServiceModel {
    #[serde(rename = "id")]
    pub service_type_id: i64,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "pagado_por", default)]
    pub paid_by: Option<String>,
    #[serde(rename = "moneda", default, deserialize_with = "de::opt_string_or_number")]
    pub currency: Option<String>,
    #[serde(rename = "valor_tasa_cambio", default)]
    pub exchange_rate: Option<Decimal>,
}

/// Row of `servicio_tipo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTypeModel {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
}
