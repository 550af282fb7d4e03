//! Cross-checks between the spot and forward engines.
//!
//! Both engines price the same option through two equivalent
//! parameterizations, so their outputs must reconcile:
//!
//! 1. spot engine: `C − P = S − K·e^{−rT}`
//! 2. forward engine: direct put equals the parity-derived put
//! 3. spot call equals forward call

pub mod config;
pub mod types;

pub use config::{ContractBook, ValidationConfig};
pub use types::{ParityReport, PricingResult};

use crate::contract::{OptionContract, OptionType};
use crate::error::Result;
use crate::models::bs::{ForwardPriceEngine, SpotPriceEngine};
use crate::models::traits::PricingEngine;

/// Prices `contract` with both engines and reconciles the results.
pub fn check_parity(contract: &OptionContract, config: &ValidationConfig) -> Result<ParityReport> {
    let spot = SpotPriceEngine::new(contract)?;
    let forward = ForwardPriceEngine::new(contract)?;

    let parity_rhs = contract.spot_price() - contract.strike_price() * spot.discount_factor();
    let spot_parity_residual = (spot.call_price() - spot.put_price()) - parity_rhs;
    let forward_put_discrepancy = forward.put_price() - forward.put_price_from_parity();
    let engine_call_discrepancy = spot.call_price() - forward.call_price();

    let passed = config.agrees(spot.call_price() - spot.put_price(), parity_rhs)
        && config.agrees(forward.put_price(), forward.put_price_from_parity())
        && config.agrees(spot.call_price(), forward.call_price());

    if !passed {
        tracing::warn!(
            trade_date = %contract.trade_date(),
            expiry_date = %contract.expiry_date(),
            strike = contract.strike_price(),
            spot_parity_residual,
            forward_put_discrepancy,
            engine_call_discrepancy,
            "put-call parity check failed"
        );
    }

    Ok(ParityReport {
        spot_call: spot.call_price(),
        spot_put: spot.put_price(),
        forward_call: forward.call_price(),
        forward_put: forward.put_price(),
        forward_put_from_parity: forward.put_price_from_parity(),
        spot_parity_residual,
        forward_put_discrepancy,
        engine_call_discrepancy,
        passed,
    })
}

/// Prices `contract` with the forward engine and flattens the result.
pub fn pricing_result(contract: &OptionContract) -> Result<PricingResult> {
    let engine = ForwardPriceEngine::new(contract)?;

    Ok(PricingResult {
        trade_date: contract.trade_date(),
        expiry_date: contract.expiry_date(),
        spot_price: contract.spot_price(),
        strike_price: contract.strike_price(),
        time_to_expiry: contract.time_to_expiry(),
        forward_price: engine.forward_price(),
        call_price: engine.call_price(),
        put_price: engine.put_price(),
        put_price_from_parity: engine.put_price_from_parity(),
        moneyness: contract.moneyness(OptionType::Call),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Moneyness;

    #[test]
    fn test_reference_contract_passes_strict() {
        let contract = OptionContract::new("23.11.2022", "10.05.2023", 19.0, 17.0, 0.005, 0.3).unwrap();
        let report = check_parity(&contract, &ValidationConfig::strict()).unwrap();

        assert!(report.passed);
        assert!(report.spot_parity_residual.abs() < 1e-12);
        assert!(report.forward_put_discrepancy.abs() < 1e-12);
        assert!(report.engine_call_discrepancy.abs() < 1e-12);
        assert!((report.spot_call - 2.696_884).abs() < 1e-6);
        assert!((report.forward_put_from_parity - 0.657_903).abs() < 1e-6);
    }

    #[test]
    fn test_zero_tolerance_still_reports_residuals() {
        let config = ValidationConfig {
            relative_tolerance: 0.0,
            absolute_tolerance: 0.0,
        };
        let contract = OptionContract::new("01.01.2023", "01.01.2026", 123.4, 98.7, 0.07, 0.45).unwrap();
        let report = check_parity(&contract, &config).unwrap();
        assert!(report.spot_parity_residual.abs() < 1e-9);
        assert!(report.forward_put_discrepancy.abs() < 1e-9);
        assert_eq!(report.forward_call, pricing_result(&contract).unwrap().call_price);
    }

    #[test]
    fn test_pricing_result_fields() {
        let contract = OptionContract::new("23.11.2022", "10.05.2023", 110.0, 100.0, 0.005, 0.3).unwrap();
        let result = pricing_result(&contract).unwrap();

        assert_eq!(result.spot_price, 110.0);
        assert_eq!(result.strike_price, 100.0);
        assert_eq!(result.moneyness, Moneyness::InTheMoney);
        assert_eq!(result.forward_price, contract.forward_price());
        assert!((result.call_price - 14.571_389).abs() < 1e-6);
        assert!((result.put_price - 4.342_088).abs() < 1e-6);
        assert!(result.call_price > result.put_price);
    }
}
