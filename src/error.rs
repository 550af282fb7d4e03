//! Error types for contract construction and pricing.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid date format: '{input}' (expected DD.MM.YYYY)")]
    InvalidDateFormat { input: String },

    #[error("Invalid date range: expiry {expiry_date} is not after trade date {trade_date}")]
    InvalidDateRange {
        trade_date: NaiveDate,
        expiry_date: NaiveDate,
    },

    #[error("Degenerate inputs: {0}")]
    DegenerateInputs(String),

    #[error("Unsupported dividend yield {0}: only zero-dividend contracts are priced")]
    UnsupportedDividendYield(f64),
}

pub type Result<T> = std::result::Result<T, PricingError>;

impl PricingError {
    pub fn invalid_date_format(input: impl Into<String>) -> Self {
        Self::InvalidDateFormat {
            input: input.into(),
        }
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInputs(msg.into())
    }
}

/// Rejects NaN/inf and anything not strictly positive.
pub(crate) fn ensure_positive(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::degenerate(format!(
            "{} must be > 0 and finite (got {})",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn ensure_finite(value: f64, name: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::degenerate(format!(
            "{} must be finite (got {})",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_check_rejects_zero_nan_and_negative() {
        assert!(ensure_positive(1.0, "spot_price").is_ok());
        assert!(ensure_positive(0.0, "spot_price").is_err());
        assert!(ensure_positive(-2.0, "spot_price").is_err());
        assert!(ensure_positive(f64::NAN, "spot_price").is_err());
        assert!(ensure_positive(f64::INFINITY, "spot_price").is_err());
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ensure_positive(0.0, "volatility").unwrap_err();
        assert!(matches!(err, PricingError::DegenerateInputs(_)));
        assert!(err.to_string().contains("volatility"));

        let err = PricingError::invalid_date_format("2023-05-10");
        assert_eq!(
            err.to_string(),
            "Invalid date format: '2023-05-10' (expected DD.MM.YYYY)"
        );
    }
}
