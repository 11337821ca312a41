//! Date and code-value checks that gate product creation.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::Product;

/// Two-digit day 01–31, two-digit month 01–12, four-digit year.
pub const DATE_PATTERN: &str = r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/[0-9]{4}$";

lazy_static! {
    static ref DATE_FORMAT: Regex = Regex::new(DATE_PATTERN).unwrap();
}

pub fn validate_date_grammar(text: &str) -> bool {
    DATE_FORMAT.is_match(text)
}

/// Range checks on the split date. The lower bounds are inclusive of zero and
/// the day bound ignores the month's length.
pub fn validate_date_components(day: i64, month: i64, year: i64) -> Result<(), ValidationError> {
    if !(0..=31).contains(&day) {
        return Err(ValidationError::InvalidDay);
    }
    if !(0..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth);
    }
    if year < 0 {
        return Err(ValidationError::InvalidYear);
    }
    Ok(())
}

/// Full expiration check: grammar first, then each component in order.
pub fn validate_expiration(text: &str) -> Result<(), ValidationError> {
    if !validate_date_grammar(text) {
        return Err(ValidationError::InvalidExpiration);
    }

    let mut parts = text.split('/');
    let day = parse_component(parts.next(), ValidationError::InvalidDay)?;
    let month = parse_component(parts.next(), ValidationError::InvalidMonth)?;
    let year = parse_component(parts.next(), ValidationError::InvalidYear)?;

    validate_date_components(day, month, year)
}

fn parse_component(part: Option<&str>, err: ValidationError) -> Result<i64, ValidationError> {
    part.and_then(|p| p.parse().ok()).ok_or(err)
}

/// Parse a `priceGt` threshold at single precision and widen it. Finite text
/// that overflows `f32` is rejected rather than saturated to infinity.
pub fn parse_price_threshold(raw: &str) -> Option<f64> {
    let value: f32 = raw.parse().ok()?;
    if value.is_infinite() && !is_infinity_literal(raw) {
        return None;
    }
    Some(f64::from(value))
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub fn validate_unique_code(code: &str, existing: &[Product]) -> bool {
    !existing.iter().any(|p| p.code_value == code)
}
