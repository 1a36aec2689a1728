//! Store Fixtures

use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, amounts::parse_amount},
    stores::StorePolicy,
};

/// Store Fixture
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Store display name
    pub name: String,

    /// City the store ships from; the canonical city when omitted
    #[serde(default)]
    pub origin_city: Option<String>,

    /// Whether the store offers free delivery; defaults to whether a threshold is set
    #[serde(default)]
    pub offers_free_delivery: Option<bool>,

    /// Free-delivery threshold (e.g., "25.00")
    #[serde(default)]
    pub free_delivery_threshold: Option<String>,
}

impl StoreFixture {
    /// Convert into a policy, applying the canonical city when no origin is given.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidAmount`] if the threshold cannot be parsed.
    pub fn into_policy(
        self,
        key: String,
        canonical_city: &str,
        currency: &'static Currency,
    ) -> Result<StorePolicy, FixtureError> {
        let threshold = self
            .free_delivery_threshold
            .as_deref()
            .map(|amount| parse_amount(amount, currency))
            .transpose()?;

        let origin_city = self
            .origin_city
            .unwrap_or_else(|| canonical_city.to_string());

        let mut policy = StorePolicy::new(key, self.name, origin_city);

        policy.offers_free_delivery = self.offers_free_delivery.unwrap_or(threshold.is_some());
        policy.free_delivery_threshold = threshold;

        Ok(policy)
    }
}
