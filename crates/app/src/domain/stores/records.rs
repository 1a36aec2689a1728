//! Store Records

use carriage::stores::StorePolicy;
use rusty_money::{Money, iso::Currency};

/// Store delivery policy as stored, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePolicyRecord {
    pub id: String,
    pub name: String,
    pub origin_city: Option<String>,
    pub offers_free_delivery: bool,
    pub free_delivery_threshold: Option<i64>,
}

impl StorePolicyRecord {
    /// Convert into a calculation snapshot. A missing or blank origin city becomes
    /// `canonical_city`; amounts are minor units of `currency`.
    pub fn into_policy(self, canonical_city: &str, currency: &'static Currency) -> StorePolicy {
        let origin_city = self
            .origin_city
            .filter(|city| !city.trim().is_empty())
            .unwrap_or_else(|| canonical_city.to_string());

        let mut policy = StorePolicy::new(self.id, self.name, origin_city);

        policy.offers_free_delivery = self.offers_free_delivery;
        policy.free_delivery_threshold = self
            .free_delivery_threshold
            .map(|minor| Money::from_minor(minor, currency));

        policy
    }
}
