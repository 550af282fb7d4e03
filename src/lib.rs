//! # Vanilla-Lib: Black-Scholes-Merton Pricing for European Vanilla Options
//!
//! `vanilla-lib` is a small, correctness-focused pricing kernel for European call and put
//! options on a non-dividend-paying underlying. Every price is computed through two
//! equivalent parameterizations so that the results can be reconciled against each other
//! and against an external reference such as a spreadsheet.
//!
//! ## Core Features
//!
//! - **Day counting**: Actual/365 fixed year fractions from `DD.MM.YYYY` trade terms
//! - **Spot engine**: classic Black-Scholes on the spot price
//! - **Forward engine**: the same option priced on the forward price, plus a put derived
//!   from put-call parity
//! - **Parity validation**: configurable tolerances and a per-contract report of every
//!   cross-check
//!
//! ## Quick Start
//!
//! ```rust
//! use vanilla_lib::{ForwardPriceEngine, OptionContract, PricingEngine, SpotPriceEngine};
//!
//! let contract = OptionContract::new("23.11.2022", "10.05.2023", 19.0, 17.0, 0.005, 0.3)?;
//!
//! let spot = SpotPriceEngine::new(&contract)?;
//! let forward = ForwardPriceEngine::new(&contract)?;
//!
//! assert!((spot.call_price() - 2.696884).abs() < 1e-6);
//! assert!((forward.put_price() - forward.put_price_from_parity()).abs() < 1e-9);
//! # Ok::<(), vanilla_lib::PricingError>(())
//! ```
//!
//! ## Conventions
//!
//! - Day count is Actual/365 fixed.
//! - Dividend yield is zero; a contract with any other value is rejected.
//! - Quoted rates are annually compounded by default and converted with `ln(1 + r)`;
//!   use [`Compounding::Continuous`] for a rate that is already continuous.
//!
//! ## Validation Presets
//!
//! - `strict()`: near machine precision
//! - `standard()`: 1e-6 relative, the default
//! - `spreadsheet()`: 1e-4, for figures copied from a printed sheet

// ================================================================================================
// MODULES
// ================================================================================================

pub mod contract;
pub mod error;
pub mod models;
pub mod validation;

// ================================================================================================
// IMPORTS
// ================================================================================================

use validation::{check_parity, pricing_result};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Contract terms and conventions
pub use contract::{
    Compounding, ContractTerms, DayCountCalculator, Moneyness, OptionContract, OptionType,
    DATE_FORMAT, DAYS_PER_YEAR,
};

// Errors
pub use error::PricingError;

// Pricing engines and their shared building blocks
pub use models::{
    bs::{BlackScholesTerms, DriftConvention, ForwardPriceEngine, SpotPriceEngine},
    normal::{norm_cdf, NormalCdf},
    traits::PricingEngine,
};

// Validation types
pub use validation::{ContractBook, ParityReport, PricingResult, ValidationConfig};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured validation tolerances for common use cases.
///
/// # Available Configurations
///
/// - [`strict()`]: Regression testing of the engines themselves
/// - [`standard()`]: Everyday pricing checks
/// - [`spreadsheet()`]: Comparison against externally rounded figures
pub mod default_configs {
    use crate::validation::ValidationConfig;

    /// Near-machine-precision tolerances.
    ///
    /// **Characteristics:**
    /// - Relative tolerance: 1e-9
    /// - Absolute tolerance: 1e-12
    ///
    /// # Example
    ///
    /// ```rust
    /// use vanilla_lib::default_configs;
    ///
    /// let config = default_configs::strict();
    /// assert!(config.agrees(1.0, 1.0 + 1e-12));
    /// ```
    pub fn strict() -> ValidationConfig {
        ValidationConfig::strict()
    }

    /// Default tolerances.
    ///
    /// **Characteristics:**
    /// - Relative tolerance: 1e-6
    /// - Absolute tolerance: 1e-10
    pub fn standard() -> ValidationConfig {
        ValidationConfig::standard()
    }

    /// Tolerances for figures printed to four decimals.
    ///
    /// **Characteristics:**
    /// - Relative tolerance: 1e-4
    /// - Absolute tolerance: 1e-4
    ///
    /// **Use Cases:**
    /// - Reconciling against a spreadsheet model
    /// - Checking prices quoted in reports
    pub fn spreadsheet() -> ValidationConfig {
        ValidationConfig::spreadsheet()
    }
}

/// Price a single contract.
///
/// The terms are validated first; an invalid contract returns an error and never a
/// price. The prices come from the forward engine, which also supplies the
/// parity-derived put.
///
/// # Errors
///
/// * [`PricingError::InvalidDateFormat`] if a date is not `DD.MM.YYYY`
/// * [`PricingError::InvalidDateRange`] if expiry is not after the trade date
/// * [`PricingError::DegenerateInputs`] for non-positive spot, strike or volatility
/// * [`PricingError::UnsupportedDividendYield`] for a non-zero dividend yield
///
/// # Example
///
/// ```rust
/// use vanilla_lib::{price_contract, ContractTerms, Moneyness};
///
/// let terms = ContractTerms::new("23.11.2022", "10.05.2023", 19.0, 17.0, 0.005, 0.3);
/// let result = price_contract(&terms)?;
///
/// assert_eq!(result.moneyness, Moneyness::InTheMoney);
/// assert!((result.put_price - 0.657903).abs() < 1e-6);
/// # Ok::<(), vanilla_lib::PricingError>(())
/// ```
pub fn price_contract(terms: &ContractTerms) -> Result<PricingResult, PricingError> {
    let contract = OptionContract::from_terms(terms)?;
    pricing_result(&contract)
}

/// Price a batch of contracts.
///
/// Results are returned in input order. The first invalid contract aborts the batch
/// with its error; no partial result list is returned.
///
/// Contracts are independent, so callers who want parallelism can split the slice
/// and call this from several threads.
pub fn price_contracts(terms: &[ContractTerms]) -> Result<Vec<PricingResult>, PricingError> {
    let mut results = Vec::with_capacity(terms.len());

    for (idx, t) in terms.iter().enumerate() {
        let result = price_contract(t).map_err(|err| {
            tracing::debug!(index = idx, error = %err, "contract rejected");
            err
        })?;
        results.push(result);
    }

    Ok(results)
}

/// Price a contract with both engines and reconcile them.
///
/// Produces exactly the report [`validation::check_parity`] does, from raw terms.
///
/// # Example
///
/// ```rust
/// use vanilla_lib::{default_configs, validate_parity, ContractTerms};
///
/// let terms = ContractTerms::new("23.11.2022", "10.05.2023", 100.0, 110.0, 0.005, 0.3);
/// let report = validate_parity(&terms, &default_configs::standard())?;
///
/// assert!(report.passed);
/// assert!(report.forward_put > report.forward_call);
/// # Ok::<(), vanilla_lib::PricingError>(())
/// ```
pub fn validate_parity(
    terms: &ContractTerms,
    config: &ValidationConfig,
) -> Result<ParityReport, PricingError> {
    let contract = OptionContract::from_terms(terms)?;
    check_parity(&contract, config)
}
