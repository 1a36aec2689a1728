//! Data sources
//!
//! Read-only collaborators the calculator consults. Persistence layers implement these
//! traits; the in-memory implementations here back fixtures and tests.

use std::convert::Infallible;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};

use crate::{
    routes::RouteTable,
    stores::{StoreId, StorePolicy},
};

/// Batch lookup of store delivery policies.
#[async_trait]
pub trait StorePolicies: Send + Sync {
    /// Error raised when the backing store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the policies of the given stores. Stores without a record are left out.
    async fn store_policies(&self, stores: &[StoreId]) -> Result<Vec<StorePolicy>, Self::Error>;
}

/// Lookup of active fee routes.
#[async_trait]
pub trait FeeRoutes: Send + Sync {
    /// Error raised when the backing store cannot be read.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fee of the active route from `from_city` to `to_region`, if one exists.
    async fn active_route_fee(
        &self,
        from_city: &str,
        to_region: &str,
    ) -> Result<Option<Money<'static, Currency>>, Self::Error>;
}

/// Store policies held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorePolicies {
    policies: FxHashMap<StoreId, StorePolicy>,
}

impl InMemoryStorePolicies {
    /// Create an empty set of policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of policies; later entries replace earlier ones for the same store.
    pub fn with_policies(policies: impl IntoIterator<Item = StorePolicy>) -> Self {
        let mut set = Self::new();

        for policy in policies {
            set.insert(policy);
        }

        set
    }

    /// Add or replace a policy.
    pub fn insert(&mut self, policy: StorePolicy) {
        self.policies.insert(policy.store.clone(), policy);
    }

    /// Policy for a single store
    pub fn get(&self, store: &StoreId) -> Option<&StorePolicy> {
        self.policies.get(store)
    }
}

#[async_trait]
impl StorePolicies for InMemoryStorePolicies {
    type Error = Infallible;

    async fn store_policies(&self, stores: &[StoreId]) -> Result<Vec<StorePolicy>, Self::Error> {
        Ok(stores
            .iter()
            .filter_map(|store| self.policies.get(store))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FeeRoutes for RouteTable {
    type Error = Infallible;

    async fn active_route_fee(
        &self,
        from_city: &str,
        to_region: &str,
    ) -> Result<Option<Money<'static, Currency>>, Self::Error> {
        Ok(self.active_fee(from_city, to_region))
    }
}

#[async_trait]
impl<T: StorePolicies + ?Sized> StorePolicies for &T {
    type Error = T::Error;

    async fn store_policies(&self, stores: &[StoreId]) -> Result<Vec<StorePolicy>, Self::Error> {
        (**self).store_policies(stores).await
    }
}

#[async_trait]
impl<T: FeeRoutes + ?Sized> FeeRoutes for &T {
    type Error = T::Error;

    async fn active_route_fee(
        &self,
        from_city: &str,
        to_region: &str,
    ) -> Result<Option<Money<'static, Currency>>, Self::Error> {
        (**self).active_route_fee(from_city, to_region).await
    }
}
