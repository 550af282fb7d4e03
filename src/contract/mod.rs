//! European vanilla option terms.
//!
//! [`ContractTerms`] is the raw, serializable record a caller fills in;
//! [`OptionContract`] is the validated, immutable value object every pricing
//! engine works from. All derived quantities (time to expiry, continuous rate,
//! forward price, discount factor) are computed once at construction.

pub mod day_count;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, PricingError, Result};
pub use day_count::{DayCountCalculator, DATE_FORMAT, DAYS_PER_YEAR};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Moneyness of an option relative to its strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneyness {
    InTheMoney,
    AtTheMoney,
    OutOfTheMoney,
}

/// How the quoted risk-free rate is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compounding {
    /// Effective annual rate; converted with `ln(1 + r)`.
    #[default]
    Annual,
    /// Already continuously compounded.
    Continuous,
}

impl Compounding {
    /// Continuously compounded equivalent of `quoted`.
    pub fn to_continuous(&self, quoted: f64) -> Result<f64> {
        ensure_finite(quoted, "risk_free_rate")?;
        match self {
            Compounding::Annual => {
                if quoted <= -1.0 {
                    return Err(PricingError::degenerate(format!(
                        "annually compounded risk_free_rate must be > -1 (got {})",
                        quoted
                    )));
                }
                Ok(quoted.ln_1p())
            }
            Compounding::Continuous => Ok(quoted),
        }
    }
}

/// Raw trade terms as entered by a user or read from a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    /// Trade date, `DD.MM.YYYY`
    pub trade_date: String,
    /// Expiry date, `DD.MM.YYYY`
    pub expiry_date: String,
    pub spot_price: f64,
    pub strike_price: f64,
    /// Quoted risk-free rate (see `compounding`)
    pub risk_free_rate: f64,
    /// Annualized volatility (as decimal, e.g., 0.3 for 30%)
    pub volatility: f64,
    /// Must be zero; kept so terms files can state it explicitly
    #[serde(default)]
    pub dividend_yield: f64,
    #[serde(default)]
    pub compounding: Compounding,
}

impl ContractTerms {
    /// Zero-dividend terms with an annually compounded rate.
    pub fn new(
        trade_date: impl Into<String>,
        expiry_date: impl Into<String>,
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            trade_date: trade_date.into(),
            expiry_date: expiry_date.into(),
            spot_price,
            strike_price,
            risk_free_rate,
            volatility,
            dividend_yield: 0.0,
            compounding: Compounding::Annual,
        }
    }

    pub fn with_compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }
}

/// Validated, immutable European option contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    trade_date: NaiveDate,
    expiry_date: NaiveDate,
    spot_price: f64,
    strike_price: f64,
    quoted_rate: f64,
    compounding: Compounding,
    risk_free_rate: f64,
    dividend_yield: f64,
    volatility: f64,
    time_to_expiry: f64,
}

impl OptionContract {
    /// Builds a zero-dividend contract with an annually compounded rate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vanilla_lib::OptionContract;
    ///
    /// let contract = OptionContract::new("23.11.2022", "10.05.2023", 19.0, 17.0, 0.005, 0.3)?;
    /// assert!((contract.time_to_expiry() - 168.0 / 365.0).abs() < 1e-15);
    /// # Ok::<(), vanilla_lib::PricingError>(())
    /// ```
    pub fn new(
        trade_date: &str,
        expiry_date: &str,
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Result<Self> {
        Self::from_terms(&ContractTerms::new(
            trade_date,
            expiry_date,
            spot_price,
            strike_price,
            risk_free_rate,
            volatility,
        ))
    }

    /// Validates `terms` and computes the derived quantities.
    ///
    /// Dates are checked first, then the numeric invariants, so a contract
    /// with both a bad date and a bad price reports the date.
    pub fn from_terms(terms: &ContractTerms) -> Result<Self> {
        let trade_date = DayCountCalculator::parse_date(&terms.trade_date)?;
        let expiry_date = DayCountCalculator::parse_date(&terms.expiry_date)?;
        let time_to_expiry = DayCountCalculator::year_fraction_between(trade_date, expiry_date)?;

        ensure_positive(terms.spot_price, "spot_price")?;
        ensure_positive(terms.strike_price, "strike_price")?;
        ensure_positive(terms.volatility, "volatility")?;
        ensure_positive(time_to_expiry, "time_to_expiry")?;

        ensure_finite(terms.dividend_yield, "dividend_yield")?;
        if terms.dividend_yield != 0.0 {
            return Err(PricingError::UnsupportedDividendYield(terms.dividend_yield));
        }

        let risk_free_rate = terms.compounding.to_continuous(terms.risk_free_rate)?;

        Ok(Self {
            trade_date,
            expiry_date,
            spot_price: terms.spot_price,
            strike_price: terms.strike_price,
            quoted_rate: terms.risk_free_rate,
            compounding: terms.compounding,
            risk_free_rate,
            dividend_yield: terms.dividend_yield,
            volatility: terms.volatility,
            time_to_expiry,
        })
    }

    pub fn trade_date(&self) -> NaiveDate {
        self.trade_date
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Continuously compounded annual rate used by the formulas.
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Rate as it was quoted on the terms.
    pub fn quoted_rate(&self) -> f64 {
        self.quoted_rate
    }

    pub fn compounding(&self) -> Compounding {
        self.compounding
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Actual/365 fixed year fraction between trade and expiry.
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// F = S * exp((r - q) * T)
    pub fn forward_price(&self) -> f64 {
        self.spot_price * ((self.risk_free_rate - self.dividend_yield) * self.time_to_expiry).exp()
    }

    /// exp(-r * T)
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }

    /// Classifies the option by spot against strike.
    pub fn moneyness(&self, option_type: OptionType) -> Moneyness {
        let intrinsic = option_type.intrinsic(self.spot_price, self.strike_price);
        if intrinsic > 0.0 {
            Moneyness::InTheMoney
        } else if self.spot_price == self.strike_price {
            Moneyness::AtTheMoney
        } else {
            Moneyness::OutOfTheMoney
        }
    }
}
