use anyhow::{Context, Result};
use serde::Deserialize;

use crate::contract::ContractTerms;

/// Tolerances used when reconciling two prices of the same option.
///
/// Two values `a` and `b` agree when
/// `|a - b| <= max(absolute_tolerance, relative_tolerance * max(|a|, |b|))`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_relative_tolerance")]
    pub relative_tolerance: f64,

    /// Floor for prices near zero, where a relative test is meaningless
    #[serde(default = "default_absolute_tolerance")]
    pub absolute_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: default_relative_tolerance(),
            absolute_tolerance: default_absolute_tolerance(),
        }
    }
}

impl ValidationConfig {
    /// Near machine precision; both engines should still pass
    pub fn strict() -> Self {
        Self {
            relative_tolerance: 1e-9,
            absolute_tolerance: 1e-12,
        }
    }

    /// Default tolerances for everyday checks
    pub fn standard() -> Self {
        Self::default()
    }

    /// Loose enough to compare against figures copied from a spreadsheet
    /// printed to four decimals
    pub fn spreadsheet() -> Self {
        Self {
            relative_tolerance: 1e-4,
            absolute_tolerance: 1e-4,
        }
    }

    /// Parses a config from TOML; missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("Failed to parse validation config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("relative_tolerance", self.relative_tolerance),
            ("absolute_tolerance", self.absolute_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("{} must be >= 0 and finite (got {})", name, value);
            }
        }
        Ok(())
    }

    pub fn agrees(&self, a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.absolute_tolerance.max(self.relative_tolerance * scale)
    }
}

fn default_relative_tolerance() -> f64 {
    1e-6
}

fn default_absolute_tolerance() -> f64 {
    1e-10
}

/// A set of contracts to price plus the tolerances to check them with.
///
/// ```toml
/// [validation]
/// relative_tolerance = 1e-6
///
/// [[contracts]]
/// trade_date = "23.11.2022"
/// expiry_date = "10.05.2023"
/// spot_price = 19.0
/// strike_price = 17.0
/// risk_free_rate = 0.005
/// volatility = 0.3
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContractBook {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub contracts: Vec<ContractTerms>,
}

impl ContractBook {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let book: Self = toml::from_str(input).context("Failed to parse contract book")?;
        book.validation
            .validate()
            .context("Invalid [validation] section")?;
        Ok(book)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read contract book {}", path.display()))?;
        Self::from_toml_str(&input).with_context(|| format!("In {}", path.display()))
    }
}
