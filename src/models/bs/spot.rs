//! Spot-price formulation of Black-Scholes-Merton.
//!
//! ```text
//! C = S·Φ(d1) − K·e^{−rT}·Φ(d2)
//! P = K·e^{−rT}·Φ(−d2) − S·Φ(−d1)
//! ```
//! with d1/d2 computed under [`DriftConvention::Spot`]. Put-call parity
//! `C − P = S − K·e^{−rT}` holds as a property of these two formulas.

use super::{BlackScholesTerms, DriftConvention};
use crate::contract::OptionContract;
use crate::error::Result;
use crate::models::normal::norm_cdf;
use crate::models::traits::PricingEngine;
use crate::models::utils::floor_at_zero;

/// Prices a contract from its spot price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotPriceEngine {
    spot_price: f64,
    discount_factor: f64,
    terms: BlackScholesTerms,
    call_price: f64,
    put_price: f64,
}

impl SpotPriceEngine {
    pub fn new(contract: &OptionContract) -> Result<Self> {
        let s = contract.spot_price();
        let k = contract.strike_price();
        let df = contract.discount_factor();

        let terms = BlackScholesTerms::new(
            s,
            k,
            contract.risk_free_rate(),
            contract.volatility(),
            contract.time_to_expiry(),
            DriftConvention::Spot,
        )?;
        let (d1, d2) = (terms.d1(), terms.d2());

        let call_price = floor_at_zero(s * norm_cdf(d1) - k * df * norm_cdf(d2));
        let put_price = floor_at_zero(k * df * norm_cdf(-d2) - s * norm_cdf(-d1));

        tracing::debug!(
            spot = s,
            strike = k,
            call = call_price,
            put = put_price,
            "priced contract with spot engine"
        );

        Ok(Self {
            spot_price: s,
            discount_factor: df,
            terms,
            call_price,
            put_price,
        })
    }

    pub fn terms(&self) -> &BlackScholesTerms {
        &self.terms
    }
}

impl PricingEngine for SpotPriceEngine {
    fn underlying_price(&self) -> f64 {
        self.spot_price
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
