//! Forward-price formulation of Black-Scholes-Merton (Black-76 on F).
//!
//! ```text
//! F = S·e^{rT}
//! C = e^{−rT}·(F·Φ(d1) − K·Φ(d2))
//! P = e^{−rT}·(K·Φ(−d2) − F·Φ(−d1))
//! P_parity = C − e^{−rT}·(F − K)
//! ```
//! d1/d2 use [`DriftConvention::Forward`] because the financing drift already
//! lives in F. `P` and `P_parity` are computed independently so that
//! comparing them checks the implementation.

use super::{BlackScholesTerms, DriftConvention};
use crate::contract::OptionContract;
use crate::error::Result;
use crate::models::normal::norm_cdf;
use crate::models::traits::PricingEngine;
use crate::models::utils::floor_at_zero;

/// Prices a contract from its forward price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardPriceEngine {
    forward_price: f64,
    discount_factor: f64,
    terms: BlackScholesTerms,
    call_price: f64,
    put_price: f64,
    put_price_from_parity: f64,
}

impl ForwardPriceEngine {
    pub fn new(contract: &OptionContract) -> Result<Self> {
        let f = contract.forward_price();
        let k = contract.strike_price();
        let df = contract.discount_factor();

        let terms = BlackScholesTerms::new(
            f,
            k,
            contract.risk_free_rate(),
            contract.volatility(),
            contract.time_to_expiry(),
            DriftConvention::Forward,
        )?;
        let (d1, d2) = (terms.d1(), terms.d2());

        let call_price = floor_at_zero(df * (f * norm_cdf(d1) - k * norm_cdf(d2)));
        let put_price = floor_at_zero(df * (k * norm_cdf(-d2) - f * norm_cdf(-d1)));
        let put_price_from_parity = call_price - df * f + df * k;

        tracing::debug!(
            forward = f,
            strike = k,
            call = call_price,
            put = put_price,
            put_from_parity = put_price_from_parity,
            "priced contract with forward engine"
        );

        Ok(Self {
            forward_price: f,
            discount_factor: df,
            terms,
            call_price,
            put_price,
            put_price_from_parity,
        })
    }

    /// F = S·e^{rT}; same value as [`PricingEngine::underlying_price`].
    pub fn forward_price(&self) -> f64 {
        self.forward_price
    }

    /// Put price implied by put-call parity from the call.
    pub fn put_price_from_parity(&self) -> f64 {
        self.put_price_from_parity
    }

    pub fn terms(&self) -> &BlackScholesTerms {
        &self.terms
    }
}

impl PricingEngine for ForwardPriceEngine {
    fn underlying_price(&self) -> f64 {
        self.forward_price
    }

    fn d1(&self) -> f64 {
        self.terms.d1()
    }

    fn d2(&self) -> f64 {
        self.terms.d2()
    }

    fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    fn call_price(&self) -> f64 {
        self.call_price
    }

    fn put_price(&self) -> f64 {
        self.put_price
    }
}
