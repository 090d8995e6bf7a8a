use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummaryResponse {
    pub mes: String,
    pub mes_num: u32,
    pub resumen: Vec<CurrencySummaryResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySummaryResponse {
    pub moneda: String,
    pub ingreso: Decimal,
    pub egreso: Decimal,
    pub ganancia: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateIdResponse {
    pub id: u64,
}
