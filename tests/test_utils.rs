#![allow(dead_code)] // Each integration test binary uses a different subset

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use vanilla_lib::{Compounding, ContractTerms};

/// CSV row structure matching tests/data/scenarios.csv
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    trade_date: String,
    expiry_date: String,
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    compounding: Compounding,
    expected_call: f64,
    expected_put: f64,
}

/// A contract together with its independently computed reference prices
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub terms: ContractTerms,
    pub expected_call: f64,
    pub expected_put: f64,
}

pub const SCENARIOS_PATH: &str = "tests/data/scenarios.csv";

/// Load reference scenarios from CSV
pub fn load_scenarios(file_path: &str) -> Result<Vec<Scenario>, Box<dyn std::error::Error>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let terms = ContractTerms::new(
            row.trade_date,
            row.expiry_date,
            row.spot_price,
            row.strike_price,
            row.risk_free_rate,
            row.volatility,
        )
        .with_compounding(row.compounding);

        scenarios.push(Scenario {
            name: row.name,
            terms,
            expected_call: row.expected_call,
            expected_put: row.expected_put,
        });
    }

    Ok(scenarios)
}

pub fn scenario(name: &str) -> Scenario {
    load_scenarios(SCENARIOS_PATH)
        .expect("Failed to load scenarios")
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("Unknown scenario: {}", name))
}

/// The in-the-money reference contract: 23.11.2022 -> 10.05.2023, S=19, K=17
pub fn reference_terms() -> ContractTerms {
    ContractTerms::new("23.11.2022", "10.05.2023", 19.0, 17.0, 0.005, 0.3)
}

/// Seeded generator of valid contracts spanning a wide range of moneyness,
/// maturities, rates and volatilities.
pub struct ContractSampler {
    rng: StdRng,
}

impl ContractSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn sample(&mut self) -> ContractTerms {
        let expiries = [
            "24.11.2022",
            "23.12.2022",
            "10.05.2023",
            "23.11.2023",
            "29.02.2024",
            "23.11.2025",
            "23.11.2032",
        ];
        let expiry = expiries[self.rng.gen_range(0..expiries.len())];
        let spot = self.rng.gen_range(1.0..500.0);
        let strike = spot * self.rng.gen_range(0.5..1.5);
        let rate = self.rng.gen_range(-0.02..0.10);
        let vol = self.rng.gen_range(0.05..1.2);
        let compounding = if self.rng.gen_bool(0.5) {
            Compounding::Annual
        } else {
            Compounding::Continuous
        };

        ContractTerms::new("23.11.2022", expiry, spot, strike, rate, vol).with_compounding(compounding)
    }
}

/// Relative-or-absolute closeness used by the property tests
pub fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * a.abs().max(b.abs()).max(1.0)
}
