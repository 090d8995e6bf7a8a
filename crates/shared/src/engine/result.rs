use crate::errors::EngineError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// One row keyed by column name.
pub type Row = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// True when the first row carries `column`.
    pub fn exposes(&self, column: &str) -> bool {
        self.first().is_some_and(|row| row.contains_key(column))
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<Vec<T>, EngineError> {
        self.rows.iter().map(decode_row).collect()
    }

    /// Decodes every row on its own, so one unreadable row does not spoil
    /// the others.
    pub fn decode_each<T: DeserializeOwned>(&self) -> Vec<Result<T, EngineError>> {
        self.rows.iter().map(decode_row).collect()
    }

    pub fn decode_first<T: DeserializeOwned>(&self) -> Result<Option<T>, EngineError> {
        self.first().map(decode_row).transpose()
    }
}

impl From<Vec<Row>> for ResultSet {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

fn decode_row<T: DeserializeOwned>(row: &Row) -> Result<T, EngineError> {
    serde_json::from_value(Value::Object(row.clone()))
        .map_err(|e| EngineError::Decode(e.to_string()))
}

/// Everything a procedure call produced: result sets in delivery order plus
/// the affected-row count reported alongside them.
///
/// The engine does not keep result sets at stable positions across query
/// shapes, so consumers look sets up by content instead of by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultBundle {
    sets: Vec<ResultSet>,
    rows_affected: u64,
}

impl ResultBundle {
    pub fn new(sets: Vec<ResultSet>, rows_affected: u64) -> Self {
        Self {
            sets,
            rows_affected,
        }
    }

    pub fn sets(&self) -> &[ResultSet] {
        &self.sets
    }

    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    pub fn first_set(&self) -> Option<&ResultSet> {
        self.sets.first()
    }

    /// First non-empty set that is not a `[{total}]` count set.
    pub fn data_set(&self) -> Option<&ResultSet> {
        self.sets
            .iter()
            .find(|set| !set.is_empty() && !set.exposes("total"))
    }

    /// Value of the first set whose first row exposes a numeric `total`.
    pub fn find_total(&self) -> Option<i64> {
        self.sets
            .iter()
            .filter_map(|set| set.first())
            .filter_map(|row| row.get("total"))
            .find_map(value_as_i64)
    }
}

fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
