//! Fee configuration

use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// City stores ship from when their record does not say otherwise.
pub const DEFAULT_CANONICAL_CITY: &str = "Oran";

/// Flat fee, in minor units, charged when no route matches.
pub const DEFAULT_DELIVERY_FEE_MINOR: i64 = 500_00;

/// Settings the calculator is constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeConfig {
    /// Fee used when neither an exact nor a wildcard route matches, and for empty carts
    pub default_fee: Money<'static, Currency>,

    /// Origin city assumed for stores without a configured one
    pub canonical_city: String,
}

impl FeeConfig {
    /// Create a configuration with the given default fee and canonical city.
    pub fn new(default_fee: Money<'static, Currency>, canonical_city: impl Into<String>) -> Self {
        Self {
            default_fee,
            canonical_city: canonical_city.into(),
        }
    }

    /// Currency the default fee is expressed in.
    pub fn currency(&self) -> &'static Currency {
        self.default_fee.currency()
    }

    /// Whether `city` differs from the canonical city.
    pub fn is_non_local(&self, city: &str) -> bool {
        city != self.canonical_city
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::new(
            Money::from_minor(DEFAULT_DELIVERY_FEE_MINOR, iso::DZD),
            DEFAULT_CANONICAL_CITY,
        )
    }
}
