//! Stores

use std::fmt::{Display, Formatter, Result as FmtResult};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Identifier of a selling store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    /// Create a store identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StoreId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for StoreId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Snapshot of a store's delivery configuration at calculation time.
#[derive(Debug, Clone, PartialEq)]
pub struct StorePolicy {
    /// Store the policy belongs to
    pub store: StoreId,

    /// Store display name
    pub name: String,

    /// City the store ships from
    pub origin_city: String,

    /// Whether the store waives delivery above a threshold
    pub offers_free_delivery: bool,

    /// Minimum store subtotal for free delivery; ignored unless `offers_free_delivery` is set
    pub free_delivery_threshold: Option<Money<'static, Currency>>,
}

impl StorePolicy {
    /// Create a policy for a store that charges delivery on every order.
    pub fn new(
        store: impl Into<StoreId>,
        name: impl Into<String>,
        origin_city: impl Into<String>,
    ) -> Self {
        Self {
            store: store.into(),
            name: name.into(),
            origin_city: origin_city.into(),
            offers_free_delivery: false,
            free_delivery_threshold: None,
        }
    }

    /// Policy used for a store that has no record: it ships from the canonical city,
    /// never offers free delivery, and is named after its identifier.
    pub fn fallback(store: StoreId, canonical_city: &str) -> Self {
        let name = store.to_string();

        Self::new(store, name, canonical_city)
    }

    /// Offer free delivery once the store subtotal reaches `threshold`.
    #[must_use]
    pub fn with_free_delivery_from(mut self, threshold: Money<'static, Currency>) -> Self {
        self.offers_free_delivery = true;
        self.free_delivery_threshold = Some(threshold);
        self
    }

    /// Whether a store subtotal waives the delivery fee.
    pub fn qualifies_for_free_delivery(&self, subtotal: &Money<'_, Currency>) -> bool {
        if !self.offers_free_delivery {
            return false;
        }

        self.free_delivery_threshold
            .as_ref()
            .is_some_and(|threshold| subtotal.amount() >= threshold.amount())
    }
}
