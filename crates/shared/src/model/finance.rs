use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row of `resumen_financiero`: one (month, currency) aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummaryRow {
    /// Month name as the database spells it. Older procedure versions omit it.
    #[serde(default)]
    pub mes: Option<String>,
    pub mes_num: u32,
    pub moneda: String,
    /// NULL when no trip of the group has been priced yet.
    #[serde(default)]
    pub ingreso: Option<Decimal>,
    #[serde(default)]
    pub egreso: Option<Decimal>,
    #[serde(default)]
    pub ganancia: Option<Decimal>,
}
