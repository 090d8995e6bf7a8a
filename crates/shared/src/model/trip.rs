use super::{de, trip_service::TripServiceModel};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    #[serde(rename = "nacional")]
    Domestic,
    #[serde(rename = "internacional")]
    International,
}

/// Owned by the database; callers never write it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "finalizado")]
    Finished,
    #[serde(rename = "cancelado")]
    Cancelled,
}

/// Row of `obtener_viajes` / `obtener_viaje`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripModel {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "valor_total")]
    pub total_value: Decimal,
    #[serde(rename = "destino")]
    pub destination: Destination,
    #[serde(rename = "fecha_ida", default, deserialize_with = "de::lenient_date")]
    pub departure_date: Option<NaiveDate>,
    #[serde(rename = "fecha_vuelta", default, deserialize_with = "de::lenient_date")]
    pub return_date: Option<NaiveDate>,
    /// Display name of the currency.
    #[serde(rename = "moneda", default, deserialize_with = "de::opt_string_or_number")]
    pub currency: Option<String>,
    #[serde(rename = "estado")]
    pub status: TripStatus,
    #[serde(rename = "costo", default)]
    pub cost: Option<Decimal>,
    #[serde(rename = "ganancia", default)]
    pub profit: Option<Decimal>,
    #[serde(rename = "valor_tasa_cambio", default)]
    pub exchange_rate: Option<Decimal>,
    #[serde(rename = "fecha", default, deserialize_with = "de::lenient_datetime")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "servicios", default, deserialize_with = "de::json_array")]
    pub services: Vec<TripServiceModel>,
}

/// Single `{id}` row returned by the trip write procedures.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TripIdRow {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
}
