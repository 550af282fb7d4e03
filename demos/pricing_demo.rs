// demos/pricing_demo.rs

//! Demonstration of spot and forward pricing with a put-call parity cross-check
//!
//! This example shows how to:
//! 1. Build a contract from DD.MM.YYYY trade terms
//! 2. Price it with the spot and the forward engine
//! 3. Reconcile the two engines with a parity report
//! 4. Price a small book of contracts
//!
//! Set `RUST_LOG=vanilla_lib=debug` to see the engines' log output.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vanilla_lib::{
    default_configs, price_contracts, validate_parity, ContractTerms, ForwardPriceEngine,
    OptionContract, PricingEngine, SpotPriceEngine,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes-Merton Pricing Demo");
    println!("=================================");

    let terms = ContractTerms::new("23.11.2022", "10.05.2023", 19.0, 17.0, 0.005, 0.3);
    let contract = OptionContract::from_terms(&terms)?;

    println!("\nContract:");
    println!("  Trade date:      {}", contract.trade_date());
    println!("  Expiry date:     {}", contract.expiry_date());
    println!("  Time to expiry:  {:.6} years", contract.time_to_expiry());
    println!("  Spot / Strike:   {} / {}", contract.spot_price(), contract.strike_price());
    println!(
        "  Rate:            {:.4}% quoted, {:.6}% continuous",
        contract.quoted_rate() * 100.0,
        contract.risk_free_rate() * 100.0
    );
    println!("  Volatility:      {:.1}%", contract.volatility() * 100.0);

    println!("\nStep 1: Pricing with both engines...");

    let spot = SpotPriceEngine::new(&contract)?;
    let forward = ForwardPriceEngine::new(&contract)?;

    println!(
        "{:<10} {:<12} {:<10} {:<10} {:<10} {:<10}",
        "Engine", "Underlying", "d1", "d2", "Call", "Put"
    );
    println!("{}", "-".repeat(66));
    println!(
        "{:<10} {:<12.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6}",
        "spot",
        spot.underlying_price(),
        spot.d1(),
        spot.d2(),
        spot.call_price(),
        spot.put_price()
    );
    println!(
        "{:<10} {:<12.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6}",
        "forward",
        forward.underlying_price(),
        forward.d1(),
        forward.d2(),
        forward.call_price(),
        forward.put_price()
    );
    println!("  Put from parity: {:.6}", forward.put_price_from_parity());

    println!("\nStep 2: Reconciling engines...");

    let report = validate_parity(&terms, &default_configs::strict())?;
    println!("  Spot parity residual:    {:+.3e}", report.spot_parity_residual);
    println!("  Forward put discrepancy: {:+.3e}", report.forward_put_discrepancy);
    println!("  Engine call discrepancy: {:+.3e}", report.engine_call_discrepancy);
    println!("  Passed (strict):         {}", report.passed);

    println!("\nStep 3: Pricing a small book...");

    let book: Vec<ContractTerms> = [(110.0, 100.0), (100.0, 100.0), (100.0, 110.0)]
        .into_iter()
        .map(|(s, k)| ContractTerms::new("23.11.2022", "10.05.2023", s, k, 0.005, 0.3))
        .collect();

    println!(
        "{:<8} {:<8} {:<16} {:<12} {:<12}",
        "Spot", "Strike", "Moneyness", "Call", "Put"
    );
    println!("{}", "-".repeat(56));
    for result in price_contracts(&book)? {
        println!(
            "{:<8.1} {:<8.1} {:<16} {:<12.6} {:<12.6}",
            result.spot_price,
            result.strike_price,
            format!("{:?}", result.moneyness),
            result.call_price,
            result.put_price
        );
    }

    Ok(())
}
