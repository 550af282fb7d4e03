pub mod bs;
pub mod normal;

/// Common traits used by all pricing engines
pub mod traits {
    use crate::contract::OptionType;

    /// Read-only query surface of a priced contract.
    ///
    /// Engines compute everything when they are built, so every method here is
    /// a plain accessor.
    pub trait PricingEngine {
        /// Price the engine feeds into d1 (spot or forward).
        fn underlying_price(&self) -> f64;
        fn d1(&self) -> f64;
        fn d2(&self) -> f64;
        /// exp(-r * T)
        fn discount_factor(&self) -> f64;
        fn call_price(&self) -> f64;
        fn put_price(&self) -> f64;

        fn price(&self, option_type: OptionType) -> f64 {
            match option_type {
                OptionType::Call => self.call_price(),
                OptionType::Put => self.put_price(),
            }
        }
    }
}

/// Utility functions shared by the engines
pub mod utils {
    /// Rounding can leave a deep out-of-the-money price a few ulps below zero.
    /// NaN passes through unchanged instead of becoming a price of 0.
    pub(crate) fn floor_at_zero(price: f64) -> f64 {
        if price.is_nan() {
            return price;
        }
        price.max(0.0)
    }

}
