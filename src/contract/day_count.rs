// src/contract/day_count.rs

//! Actual/365 fixed day counting for trade terms quoted as `DD.MM.YYYY`.
//!
//! The year fraction between a trade date and an expiry date is the number of
//! whole calendar days between them divided by 365. Leap days count as
//! ordinary days, so a span crossing 29 February is slightly longer than one
//! year.

use chrono::NaiveDate;

use crate::error::{PricingError, Result};

/// Textual date format accepted for trade and expiry dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Denominator of the Actual/365 fixed convention.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Converts a date span into an annualized time-to-expiry (Actual/365 fixed).
///
/// The convention carries no state, so every operation is an associated
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCountCalculator;

impl DayCountCalculator {
    /// Parses a `DD.MM.YYYY` date. Surrounding whitespace is ignored.
    pub fn parse_date(input: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
            .map_err(|_| PricingError::invalid_date_format(input))
    }

    /// Whole calendar days from `trade_date` to `expiry_date`.
    ///
    /// Fails with [`PricingError::InvalidDateRange`] unless expiry is strictly
    /// after the trade date.
    pub fn days_between(trade_date: NaiveDate, expiry_date: NaiveDate) -> Result<i64> {
        if expiry_date <= trade_date {
            return Err(PricingError::InvalidDateRange {
                trade_date,
                expiry_date,
            });
        }
        Ok((expiry_date - trade_date).num_days())
    }

    pub fn year_fraction_between(trade_date: NaiveDate, expiry_date: NaiveDate) -> Result<f64> {
        let days = Self::days_between(trade_date, expiry_date)?;
        Ok(days as f64 / DAYS_PER_YEAR)
    }

    /// Year fraction between two `DD.MM.YYYY` dates.
    ///
    /// # Errors
    ///
    /// * [`PricingError::InvalidDateFormat`] if either string does not parse
    /// * [`PricingError::InvalidDateRange`] if `expiry_date <= trade_date`
    ///
    /// # Example
    ///
    /// ```rust
    /// use vanilla_lib::DayCountCalculator;
    ///
    /// let t = DayCountCalculator::year_fraction("23.11.2022", "10.05.2023").unwrap();
    /// assert!((t - 168.0 / 365.0).abs() < 1e-15);
    /// ```
    pub fn year_fraction(trade_date: &str, expiry_date: &str) -> Result<f64> {
        let trade = Self::parse_date(trade_date)?;
        let expiry = Self::parse_date(expiry_date)?;
        Self::year_fraction_between(trade, expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_span() {
        let t = DayCountCalculator::year_fraction("23.11.2022", "10.05.2023").unwrap();
        assert!((t - 168.0 / 365.0).abs() < 1e-15);
    }

    #[test]
    fn test_leap_year_counts_actual_days() {
        let t = DayCountCalculator::year_fraction("01.01.2024", "01.01.2025").unwrap();
        assert!((t - 366.0 / 365.0).abs() < 1e-15);

        let t = DayCountCalculator::year_fraction("01.01.2023", "01.01.2024").unwrap();
        assert!((t - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_single_day() {
        let t = DayCountCalculator::year_fraction("31.12.2022", "01.01.2023").unwrap();
        assert!((t - 1.0 / 365.0).abs() < 1e-15);
    }

    #[test]
    fn test_same_or_reversed_dates_rejected() {
        assert!(matches!(
            DayCountCalculator::year_fraction("10.05.2023", "10.05.2023"),
            Err(PricingError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            DayCountCalculator::year_fraction("10.05.2023", "23.11.2022"),
            Err(PricingError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_bad_formats_rejected() {
        for bad in ["2022-11-23", "23/11/2022", "31.02.2023", "", "23.11"] {
            let result = DayCountCalculator::year_fraction(bad, "10.05.2023");
            assert!(
                matches!(result, Err(PricingError::InvalidDateFormat { .. })),
                "expected format error for {:?}, got {:?}",
                bad,
                result
            );
        }
    }

    #[test]
    fn test_parsed_dates_span() {
        let trade = DayCountCalculator::parse_date("23.11.2022").unwrap();
        let expiry = DayCountCalculator::parse_date("10.05.2023").unwrap();
        assert_eq!(DayCountCalculator::days_between(trade, expiry).unwrap(), 168);
        assert_eq!(
            DayCountCalculator::year_fraction_between(trade, expiry).unwrap(),
            DayCountCalculator::year_fraction("23.11.2022", "10.05.2023").unwrap()
        );
        assert!(DayCountCalculator::days_between(expiry, trade).is_err());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let date = DayCountCalculator::parse_date(" 23.11.2022 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2022, 11, 23).unwrap());
    }
}
