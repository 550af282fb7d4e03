use chrono::NaiveDate;
use serde::Serialize;

use crate::contract::Moneyness;

/// Flat record of one priced contract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingResult {
    pub trade_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub spot_price: f64,
    pub strike_price: f64,
    /// Time to expiration in years (Actual/365 fixed)
    pub time_to_expiry: f64,
    pub forward_price: f64,
    pub call_price: f64,
    pub put_price: f64,
    /// Put derived from the call through put-call parity
    pub put_price_from_parity: f64,
    /// Moneyness of the call
    pub moneyness: Moneyness,
}

/// Every cross-check available for one contract.
///
/// Discrepancies are signed differences; `passed` applies the configured
/// tolerance to all of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParityReport {
    pub spot_call: f64,
    pub spot_put: f64,
    pub forward_call: f64,
    pub forward_put: f64,
    pub forward_put_from_parity: f64,
    /// (C − P) − (S − K·e^{−rT}) on the spot engine
    pub spot_parity_residual: f64,
    /// P − P_parity on the forward engine
    pub forward_put_discrepancy: f64,
    /// C_spot − C_forward
    pub engine_call_discrepancy: f64,
    pub passed: bool,
}
