use crate::domain::requests::Patch;
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use rust_decimal::Decimal;
use std::{borrow::Cow, sync::LazyLock};
use validator::ValidationError;

pub const MAX_SERVICE_AMOUNT: i64 = 999_999_999;
pub const SURNAME_MIN: usize = 2;
pub const SURNAME_MAX: usize = 50;

static TRIP_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{1,36}$").expect("valid trip id pattern"));

pub fn is_valid_trip_id(id: &str) -> bool {
    TRIP_ID.is_match(id)
}

/// `YYYY-MM-DD`, or a full RFC 3339 timestamp reduced to its date.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| format!("{field}: fecha inválida '{raw}', se espera YYYY-MM-DD"))
}

pub fn validate_date_range(departure: NaiveDate, return_date: NaiveDate) -> Result<(), String> {
    if departure < return_date {
        Ok(())
    } else {
        Err(format!(
            "fecha_ida ({departure}) debe ser anterior a fecha_vuelta ({return_date})"
        ))
    }
}

pub fn validate_month(month: u32) -> Result<(), String> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(format!("mes: debe estar entre 1 y 12, se recibió {month}"))
    }
}

pub fn validate_year(year: i32, floor: i32) -> Result<(), String> {
    if year >= floor {
        Ok(())
    } else {
        Err(format!("anio: debe ser mayor o igual a {floor}, se recibió {year}"))
    }
}

/// Trimmed filter cut to `max_chars` characters; blank becomes `None`.
pub fn sanitize_filter(raw: Option<&str>, max_chars: usize) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cut: String = trimmed.chars().take(max_chars).collect();
    let cut = cut.trim_end();
    (!cut.is_empty()).then(|| cut.to_string())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(invalid("range", "no puede ser negativo"));
    }
    Ok(())
}

pub fn positive(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(invalid("range", "debe ser mayor a 0"));
    }
    Ok(())
}

pub fn service_amount(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO || *value > Decimal::from(MAX_SERVICE_AMOUNT) {
        return Err(invalid("range", "debe ser mayor a 0 y no superar 999999999"));
    }
    Ok(())
}

pub fn patch_surname(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Set(surname) => {
            let len = surname.trim().chars().count();
            if !(SURNAME_MIN..=SURNAME_MAX).contains(&len) {
                return Err(invalid(
                    "length",
                    "el apellido debe tener entre 2 y 50 caracteres",
                ));
            }
            Ok(())
        }
        Patch::Keep => Ok(()),
    }
}

pub fn patch_non_negative(value: &Patch<Decimal>) -> Result<(), ValidationError> {
    value.as_set().map_or(Ok(()), non_negative)
}

pub fn patch_positive(value: &Patch<Decimal>) -> Result<(), ValidationError> {
    value.as_set().map_or(Ok(()), positive)
}

pub fn patch_service_amount(value: &Patch<Decimal>) -> Result<(), ValidationError> {
    value.as_set().map_or(Ok(()), service_amount)
}

pub fn patch_positive_id(value: &Patch<i64>) -> Result<(), ValidationError> {
    match value {
        Patch::Set(id) if *id <= 0 => Err(invalid("range", "debe ser un id mayor a 0")),
        _ => Ok(()),
    }
}

pub fn patch_date(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Set(raw) if parse_date("fecha", raw).is_err() => {
            Err(invalid("date", "fecha inválida, se espera YYYY-MM-DD"))
        }
        _ => Ok(()),
    }
}
