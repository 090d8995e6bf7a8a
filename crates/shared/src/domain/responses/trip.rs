use crate::model::{
    trip::{Destination, TripModel, TripStatus},
    trip_service::TripServiceModel,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResponse {
    pub id: String,
    #[serde(rename = "apellido")]
    pub surname: String,
    #[serde(rename = "valor_total")]
    pub total_value: Decimal,
    #[serde(rename = "destino")]
    pub destination: Destination,
    #[serde(rename = "fecha_ida")]
    pub departure_date: Option<String>,
    #[serde(rename = "fecha_vuelta")]
    pub return_date: Option<String>,
    #[serde(rename = "moneda")]
    pub currency: Option<String>,
    #[serde(rename = "estado")]
    pub status: TripStatus,
    /// `None` until the trip has been priced.
    #[serde(rename = "costo")]
    pub cost: Option<Decimal>,
    #[serde(rename = "ganancia")]
    pub profit: Option<Decimal>,
    #[serde(rename = "valor_tasa_cambio")]
    pub exchange_rate: Option<Decimal>,
    #[serde(rename = "fecha")]
    pub created_at: Option<String>,
    #[serde(rename = "servicios")]
    pub services: Vec<TripServiceResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripServiceResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "valor")]
    pub amount: Decimal,
    #[serde(rename = "pagado_por")]
    pub paid_by: Option<String>,
    #[serde(rename = "moneda")]
    pub currency: Option<String>,
    #[serde(rename = "valor_tasa_cambio")]
    pub exchange_rate: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripIdResponse {
    pub id: String,
}

impl From<TripServiceModel> for TripServiceResponse {
    fn from(model: TripServiceModel) -> Self {
        Self {
            id: model.service_type_id,
            name: model.name,
            amount: model.amount,
            paid_by: model.paid_by,
            currency: model.currency,
            exchange_rate: model.exchange_rate,
        }
    }
}

impl From<TripModel> for TripResponse {
    fn from(model: TripModel) -> Self {
        Self {
            id: model.id,
            surname: model.surname,
            total_value: model.total_value,
            destination: model.destination,
            departure_date: model.departure_date.map(|d| d.format("%Y-%m-%d").to_string()),
            return_date: model.return_date.map(|d| d.format("%Y-%m-%d").to_string()),
            currency: model.currency,
            status: model.status,
            cost: model.cost,
            profit: model.profit,
            exchange_rate: model.exchange_rate,
            created_at: model.created_at.map(|dt| dt.to_string()),
            services: model
                .services
                .into_iter()
                .map(TripServiceResponse::from)
                .collect(),
        }
    }
}
