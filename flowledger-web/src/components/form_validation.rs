//! Validation logic for the admin data-entry forms.
//!
//! Kept out of the page components so the rules are testable without a
//! browser. Each function returns the parsed value on success; the pages
//! translate [`ValidationError`] into a localized inline message.

use chrono::NaiveDate;

/// Validation errors that can occur on the target and record forms.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// No customer chosen, or the select value is not an id
    InvalidCustomer,
    /// Month is not `YYYY-MM`
    InvalidMonth,
    /// Date is not a calendar date
    InvalidDate,
    /// Amount is not a positive number
    InvalidAmount,
}

/// Validates the customer select. The placeholder option has an empty value.
pub fn validate_customer(value: &str) -> Result<i64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidCustomer)
}

/// Validates a `YYYY-MM` month string as produced by a month input.
pub fn validate_year_month(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    let Some((year, month)) = trimmed.split_once('-') else {
        return Err(ValidationError::InvalidMonth);
    };
    let month_ok = month.len() == 2
        && month
            .parse::<u32>()
            .is_ok_and(|m| (1..=12).contains(&m));
    if year.len() != 4 || year.parse::<u32>().is_err() || !month_ok {
        return Err(ValidationError::InvalidMonth);
    }
    Ok(trimmed.to_string())
}

/// Validates a `YYYY-MM-DD` date string as produced by a date input.
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Validates an amount: a finite number greater than zero.
pub fn validate_amount(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(ValidationError::InvalidAmount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_valid() {
        assert_eq!(validate_customer("42"), Ok(42));
        assert_eq!(validate_customer(" 7 "), Ok(7));
    }

    #[test]
    fn test_validate_customer_invalid() {
        assert_eq!(validate_customer(""), Err(ValidationError::Required));
        assert_eq!(validate_customer("   "), Err(ValidationError::Required));
        assert_eq!(
            validate_customer("zhang"),
            Err(ValidationError::InvalidCustomer)
        );
    }

    #[test]
    fn test_validate_year_month_valid() {
        assert_eq!(validate_year_month("2026-08"), Ok("2026-08".to_string()));
        assert_eq!(validate_year_month("2026-01"), Ok("2026-01".to_string()));
        assert_eq!(validate_year_month("2026-12"), Ok("2026-12".to_string()));
    }

    #[test]
    fn test_validate_year_month_invalid() {
        assert_eq!(validate_year_month(""), Err(ValidationError::Required));
        assert_eq!(
            validate_year_month("2026-13"),
            Err(ValidationError::InvalidMonth)
        );
        assert_eq!(
            validate_year_month("2026-0"),
            Err(ValidationError::InvalidMonth)
        );
        assert_eq!(
            validate_year_month("26-08"),
            Err(ValidationError::InvalidMonth)
        );
        assert_eq!(
            validate_year_month("2026/08"),
            Err(ValidationError::InvalidMonth)
        );
    }

    #[test]
    fn test_validate_date_valid() {
        assert_eq!(
            validate_date("2026-08-05"),
            Ok(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap())
        );
    }

    #[test]
    fn test_validate_date_invalid() {
        assert_eq!(validate_date(""), Err(ValidationError::Required));
        assert_eq!(
            validate_date("2026-02-30"),
            Err(ValidationError::InvalidDate)
        );
        assert_eq!(
            validate_date("05/08/2026"),
            Err(ValidationError::InvalidDate)
        );
    }

    #[test]
    fn test_validate_amount_valid() {
        assert_eq!(validate_amount("100"), Ok(100.0));
        assert_eq!(validate_amount("0.5"), Ok(0.5));
        assert_eq!(validate_amount(" 20000 "), Ok(20000.0));
    }

    #[test]
    fn test_validate_amount_invalid() {
        assert_eq!(validate_amount(""), Err(ValidationError::Required));
        assert_eq!(validate_amount("abc"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount("0"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount("-5"), Err(ValidationError::InvalidAmount));
        assert_eq!(validate_amount("NaN"), Err(ValidationError::InvalidAmount));
    }
}
