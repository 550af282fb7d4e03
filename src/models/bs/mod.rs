// Black-Scholes-Merton d1/d2 terms shared by the spot and forward engines.
// The engines differ only in which underlying price they feed in and whether
// the financing drift is added here or is already embedded in that price.

pub mod forward;
pub mod spot;

use crate::error::{ensure_finite, ensure_positive, PricingError, Result};

pub use forward::ForwardPriceEngine;
pub use spot::SpotPriceEngine;

/// Whether the underlying price still needs the financing drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftConvention {
    /// Underlying is the spot price; drift is `r`.
    Spot,
    /// Underlying is the forward price; drift is 0.
    Forward,
}

impl DriftConvention {
    /// Drift applied in d1 for a given continuous rate.
    pub fn drift(&self, risk_free_rate: f64) -> f64 {
        match self {
            DriftConvention::Spot => risk_free_rate,
            DriftConvention::Forward => 0.0,
        }
    }
}

/// Risk-adjusted moneyness terms d1 and d2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesTerms {
    d1: f64,
    d2: f64,
    std_dev: f64,
    convention: DriftConvention,
}

impl BlackScholesTerms {
    /// ```text
    /// d1 = (ln(U/K) + (r_adj + σ²/2)·T) / (σ·√T)
    /// d2 = d1 − σ·√T
    /// ```
    /// with `r_adj` chosen by `convention`.
    ///
    /// Fails with `DegenerateInputs` rather than producing ±inf/NaN when the
    /// volatility, time, underlying or strike is non-positive or non-finite,
    /// or when `σ·√T` underflows so that d1/d2 are no longer finite.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        time_to_expiry: f64,
        convention: DriftConvention,
    ) -> Result<Self> {
        ensure_positive(underlying_price, "underlying_price")?;
        ensure_positive(strike_price, "strike_price")?;
        ensure_finite(risk_free_rate, "risk_free_rate")?;
        ensure_positive(volatility, "volatility")?;
        ensure_positive(time_to_expiry, "time_to_expiry")?;

        let std_dev = volatility * time_to_expiry.sqrt();
        if std_dev <= 0.0 {
            return Err(PricingError::degenerate(format!(
                "volatility * sqrt(time_to_expiry) underflows to {} (volatility {}, time_to_expiry {})",
                std_dev, volatility, time_to_expiry
            )));
        }

        let drift = convention.drift(risk_free_rate);
        let d1 = ((underlying_price / strike_price).ln()
            + (drift + 0.5 * volatility * volatility) * time_to_expiry)
            / std_dev;
        let d2 = d1 - std_dev;
        ensure_finite(d1, "d1")?;
        ensure_finite(d2, "d2")?;

        tracing::trace!(?convention, d1, d2, "computed Black-Scholes terms");

        Ok(Self {
            d1,
            d2,
            std_dev,
            convention,
        })
    }

    pub fn d1(&self) -> f64 {
        self.d1
    }

    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// σ·√T
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn convention(&self) -> DriftConvention {
        self.convention
    }
}
