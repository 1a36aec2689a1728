//! Fee breakdown

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::stores::StoreId;

/// Delivery fee for a single store in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreFee {
    /// Store charged
    pub store: StoreId,

    /// Store display name
    pub store_name: String,

    /// City the store ships from
    pub origin_city: String,

    /// Fee charged; zero when free delivery applies
    pub fee: Money<'static, Currency>,

    /// Whether the store's free-delivery threshold was met
    pub free_delivery_applied: bool,
}

/// Per-store fees plus aggregates for a whole cart.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeBreakdown {
    per_store: Vec<StoreFee>,
    total_fee: Money<'static, Currency>,
    has_non_local_origin: bool,
}

impl FeeBreakdown {
    /// Breakdown for a cart with no resolvable store: a single flat fee, nothing per store.
    pub fn flat(fee: Money<'static, Currency>) -> Self {
        Self {
            per_store: Vec::new(),
            total_fee: fee,
            has_non_local_origin: false,
        }
    }

    /// Assemble a breakdown from per-store fees.
    pub fn new(
        per_store: Vec<StoreFee>,
        total_fee: Money<'static, Currency>,
        has_non_local_origin: bool,
    ) -> Self {
        Self {
            per_store,
            total_fee,
            has_non_local_origin,
        }
    }

    /// Per-store fees in cart order
    pub fn per_store(&self) -> &[StoreFee] {
        &self.per_store
    }

    /// Sum of all per-store fees
    pub fn total_fee(&self) -> Money<'static, Currency> {
        self.total_fee
    }

    /// Whether any store ships from outside the canonical city
    pub fn has_non_local_origin(&self) -> bool {
        self.has_non_local_origin
    }

    /// Fee entry for a single store
    pub fn store(&self, store: &StoreId) -> Option<&StoreFee> {
        self.per_store.iter().find(|entry| &entry.store == store)
    }

    /// Wire representation rendered by checkout UIs.
    pub fn summary(&self) -> FeeSummary {
        FeeSummary::from(self)
    }
}

/// JSON shape of a [`FeeBreakdown`]. Amounts are in minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSummary {
    /// Sum of all per-store fees
    pub total_fee: i64,

    /// Per-store fees in cart order
    pub fee_by_store: Vec<StoreFeeSummary>,

    /// Whether any store ships from outside the canonical city
    pub has_outside_origin_products: bool,
}

/// JSON shape of a [`StoreFee`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFeeSummary {
    /// Store charged
    pub store_id: StoreId,

    /// Store display name
    pub store_name: String,

    /// City the store ships from
    pub origin_city: String,

    /// Fee charged
    pub fee: i64,

    /// Whether the store's free-delivery threshold was met
    pub free_delivery_applied: bool,
}

impl From<&StoreFee> for StoreFeeSummary {
    fn from(entry: &StoreFee) -> Self {
        Self {
            store_id: entry.store.clone(),
            store_name: entry.store_name.clone(),
            origin_city: entry.origin_city.clone(),
            fee: entry.fee.to_minor_units(),
            free_delivery_applied: entry.free_delivery_applied,
        }
    }
}

impl From<&FeeBreakdown> for FeeSummary {
    fn from(breakdown: &FeeBreakdown) -> Self {
        Self {
            total_fee: breakdown.total_fee.to_minor_units(),
            fee_by_store: breakdown.per_store.iter().map(StoreFeeSummary::from).collect(),
            has_outside_origin_products: breakdown.has_non_local_origin,
        }
    }
}
