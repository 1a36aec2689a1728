//! Delivery fee calculator

use std::convert::Infallible;

use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::{
    breakdown::{FeeBreakdown, StoreFee},
    cart::{Cart, CartError},
    config::FeeConfig,
    money::exact_minor_units,
    resolution::{ResolvedFee, RouteResolver},
    sources::{FeeRoutes, StorePolicies},
    stores::{StoreId, StorePolicy},
};

/// Errors raised while calculating delivery fees.
///
/// `P` and `R` are the error types of the store policy and fee route sources.
#[derive(Debug, Error)]
pub enum DeliveryFeeError<P = Infallible, R = Infallible> {
    /// Store policies could not be read.
    #[error("failed to read store policies")]
    StorePolicies(#[source] P),

    /// Fee routes could not be read.
    #[error("failed to read fee routes")]
    FeeRoutes(#[source] R),

    /// Cart currency differs from the configured fee currency (cart, config).
    #[error("cart has currency {0}, but fees are configured in {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// A fee, or the fee total, is not a whole number of minor units within `i64` range.
    #[error("delivery fee does not fit in whole minor units")]
    UnrepresentableFee,

    /// Cart totals could not be computed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Computes per-store delivery fees for a cart.
#[derive(Debug, Clone)]
pub struct DeliveryFeeCalculator<P, R> {
    config: FeeConfig,
    resolver: RouteResolver,
    policies: P,
    routes: R,
}

impl<P: StorePolicies, R: FeeRoutes> DeliveryFeeCalculator<P, R> {
    /// Create a calculator over the given sources.
    pub fn new(config: FeeConfig, policies: P, routes: R) -> Self {
        let resolver = RouteResolver::new(config.default_fee);

        Self::with_resolver(config, resolver, policies, routes)
    }

    /// Create a calculator with a custom resolution chain.
    pub fn with_resolver(
        config: FeeConfig,
        resolver: RouteResolver,
        policies: P,
        routes: R,
    ) -> Self {
        Self {
            config,
            resolver,
            policies,
            routes,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    /// Resolve the fee of a single route, without any free-delivery logic.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryFeeError::FeeRoutes`] if the route source fails.
    pub async fn lookup_route_fee(
        &self,
        from_city: &str,
        to_region: &str,
    ) -> Result<Money<'static, Currency>, DeliveryFeeError<P::Error, R::Error>> {
        Ok(self.resolve_route(from_city, to_region).await?.fee)
    }

    /// Resolve the fee of a single route and report which step produced it.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryFeeError::FeeRoutes`] if the route source fails.
    pub async fn resolve_route(
        &self,
        from_city: &str,
        to_region: &str,
    ) -> Result<ResolvedFee, DeliveryFeeError<P::Error, R::Error>> {
        self.resolver
            .resolve(&self.routes, from_city, to_region)
            .await
            .map_err(DeliveryFeeError::FeeRoutes)
    }

    /// Calculate delivery fees for `cart` shipped to `destination`.
    ///
    /// # Errors
    ///
    /// - [`DeliveryFeeError::StorePolicies`] / [`DeliveryFeeError::FeeRoutes`]: a source failed.
    /// - [`DeliveryFeeError::CurrencyMismatch`]: the cart is not in the configured currency.
    /// - [`DeliveryFeeError::Cart`] / [`DeliveryFeeError::Money`]: totals could not be computed.
    /// - [`DeliveryFeeError::UnrepresentableFee`]: a fee or the fee total leaves minor-unit range.
    pub async fn calculate(
        &self,
        cart: &Cart,
        destination: &str,
    ) -> Result<FeeBreakdown, DeliveryFeeError<P::Error, R::Error>> {
        if cart.is_empty() {
            ensure_minor_units::<P::Error, R::Error>(&self.config.default_fee)?;

            return Ok(FeeBreakdown::flat(self.config.default_fee));
        }

        let currency = self.config.currency();

        if cart.currency() != currency {
            return Err(DeliveryFeeError::CurrencyMismatch(
                cart.currency().iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        let subtotals = cart.store_subtotals()?;
        let stores: Vec<StoreId> = subtotals.stores().cloned().collect();

        let mut policies: FxHashMap<StoreId, StorePolicy> = self
            .policies
            .store_policies(&stores)
            .await
            .map_err(DeliveryFeeError::StorePolicies)?
            .into_iter()
            .map(|policy| (policy.store.clone(), policy))
            .collect();

        let mut resolved: FxHashMap<String, ResolvedFee> = FxHashMap::default();
        let mut per_store = Vec::with_capacity(subtotals.len());
        let mut total_fee = Money::from_minor(0, currency);
        let mut has_non_local_origin = false;

        for (store, subtotal) in subtotals.iter() {
            let policy = policies.remove(store).unwrap_or_else(|| {
                StorePolicy::fallback(store.clone(), &self.config.canonical_city)
            });

            has_non_local_origin |= self.config.is_non_local(&policy.origin_city);

            let free_delivery_applied = policy.qualifies_for_free_delivery(subtotal);

            let fee = if free_delivery_applied {
                Money::from_minor(0, currency)
            } else if let Some(cached) = resolved.get(&policy.origin_city) {
                cached.fee
            } else {
                let resolution = self.resolve_route(&policy.origin_city, destination).await?;
                resolved.insert(policy.origin_city.clone(), resolution);
                resolution.fee
            };

            ensure_minor_units::<P::Error, R::Error>(&fee)?;

            total_fee = total_fee.add(fee)?;

            ensure_minor_units::<P::Error, R::Error>(&total_fee)?;

            per_store.push(StoreFee {
                store: policy.store,
                store_name: policy.name,
                origin_city: policy.origin_city,
                fee,
                free_delivery_applied,
            });
        }

        Ok(FeeBreakdown::new(per_store, total_fee, has_non_local_origin))
    }
}

fn ensure_minor_units<P, R>(fee: &Money<'_, Currency>) -> Result<(), DeliveryFeeError<P, R>> {
    match exact_minor_units(fee) {
        Some(_) => Ok(()),
        None => Err(DeliveryFeeError::UnrepresentableFee),
    }
}
