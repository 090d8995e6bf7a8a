use crate::{
    domain::requests::{Patch, ServiceLine, TripServiceUpdate},
    model::trip::Destination,
    utils::validation::{
        non_negative, patch_date, patch_non_negative, patch_positive, patch_positive_id,
        patch_surname, positive,
    },
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of the trip listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindAllTrips {
    #[serde(default)]
    pub filter: Option<String>,

    #[serde(default)]
    pub limit: Option<i64>,

    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub month: Option<u32>,

    #[serde(default)]
    pub year: Option<i32>,
}

/// Normalised listing arguments, in the order `obtener_viajes` takes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripListQuery {
    pub filter: Option<String>,
    pub limit: i64,
    pub offset: i64,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[serde(rename = "apellido")]
    #[validate(length(min = 2, max = 50, message = "El apellido debe tener entre 2 y 50 caracteres"))]
    pub surname: String,

    #[serde(rename = "valor_total")]
    #[validate(custom(function = "non_negative", message = "El valor total no puede ser negativo"))]
    pub total_value: Decimal,

    #[serde(rename = "destino")]
    pub destination: Destination,

    #[serde(rename = "fecha_ida")]
    pub departure_date: String,

    #[serde(rename = "fecha_vuelta")]
    pub return_date: String,

    #[serde(rename = "moneda")]
    #[validate(range(min = 1, message = "La moneda es obligatoria"))]
    pub currency_id: i64,

    #[serde(rename = "valor_tasa_cambio", default)]
    #[validate(custom(function = "positive", message = "La tasa de cambio debe ser mayor a 0"))]
    pub exchange_rate: Option<Decimal>,

    #[serde(rename = "servicios", default)]
    #[validate(length(min = 1, message = "El viaje debe incluir al menos un servicio"), nested)]
    pub services: Vec<ServiceLine>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTripRequest {
    #[serde(rename = "apellido", default)]
    #[validate(custom(function = "patch_surname"))]
    pub surname: Patch<String>,

    #[serde(rename = "valor_total", default)]
    #[validate(custom(function = "patch_non_negative"))]
    pub total_value: Patch<Decimal>,

    #[serde(rename = "destino", default)]
    pub destination: Patch<Destination>,

    #[serde(rename = "fecha_ida", default)]
    #[validate(custom(function = "patch_date"))]
    pub departure_date: Patch<String>,

    #[serde(rename = "fecha_vuelta", default)]
    #[validate(custom(function = "patch_date"))]
    pub return_date: Patch<String>,

    #[serde(rename = "moneda", default)]
    #[validate(custom(function = "patch_positive_id"))]
    pub currency_id: Patch<i64>,

    #[serde(rename = "valor_tasa_cambio", default)]
    #[validate(custom(function = "patch_positive"))]
    pub exchange_rate: Patch<Decimal>,

    #[serde(rename = "servicios", default)]
    #[validate(nested)]
    pub services: Option<Vec<TripServiceUpdate>>,
}

/// Validated trip row for `insertar_viaje`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub surname: String,
    pub total_value: Decimal,
    pub destination: Destination,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub currency_id: i64,
    pub exchange_rate: Option<Decimal>,
}

/// Validated partial update for `actualizar_viaje`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPatch {
    pub surname: Patch<String>,
    pub total_value: Patch<Decimal>,
    pub destination: Patch<Destination>,
    pub departure_date: Patch<NaiveDate>,
    pub return_date: Patch<NaiveDate>,
    pub currency_id: Patch<i64>,
    pub exchange_rate: Patch<Decimal>,
}

impl TripPatch {
    pub fn is_empty(&self) -> bool {
        self.surname.is_keep()
            && self.total_value.is_keep()
            && self.destination.is_keep()
            && self.departure_date.is_keep()
            && self.return_date.is_keep()
            && self.currency_id.is_keep()
            && self.exchange_rate.is_keep()
    }
}
