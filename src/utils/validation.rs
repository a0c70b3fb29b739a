use crate::utils::error::{RefundError, Result};
use chrono::{Datelike, NaiveDate};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 日期輸入格式 (與 HTML date input 相同)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_required_field<'a>(field_name: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RefundError::MissingRequiredInput {
            field: field_name.to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RefundError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        RefundError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected a date in YYYY-MM-DD format ({})", e),
        }
    })?;

    validate_range(field_name, date.year(), 1, 9999)?;
    Ok(date)
}

pub fn parse_amount(field_name: &str, value: &str) -> Result<f64> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| RefundError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a number".to_string(),
        })?;

    validate_non_negative(field_name, amount)?;
    Ok(amount)
}

pub fn parse_count(field_name: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| RefundError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a whole, non-negative number".to_string(),
        })
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(RefundError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RefundError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
