//! Delivery fees service.

use async_trait::async_trait;
use carriage::{
    breakdown::FeeBreakdown, calculator::DeliveryFeeCalculator, cart::Cart, config::FeeConfig,
    resolution::ResolvedFee,
};
use mockall::automock;
use tracing::{Span, debug, info};

use crate::{
    database::Db,
    domain::{
        deliveries::errors::DeliveryFeesServiceError, routes::PgFeeRoutes, stores::PgStorePolicies,
    },
};

#[derive(Debug, Clone)]
pub struct PgDeliveryFeesService {
    calculator: DeliveryFeeCalculator<PgStorePolicies, PgFeeRoutes>,
}

impl PgDeliveryFeesService {
    #[must_use]
    pub fn new(db: Db, config: FeeConfig) -> Self {
        let policies =
            PgStorePolicies::new(db.clone(), config.canonical_city.clone(), config.currency());
        let routes = PgFeeRoutes::new(db, config.currency());

        Self {
            calculator: DeliveryFeeCalculator::new(config, policies, routes),
        }
    }

    /// Fee configuration in use
    pub fn config(&self) -> &FeeConfig {
        self.calculator.config()
    }
}

#[async_trait]
impl DeliveryFeesService for PgDeliveryFeesService {
    #[tracing::instrument(
        name = "deliveries.service.quote",
        skip(self, cart, destination),
        fields(
            destination = %destination,
            lines = cart.len(),
            stores = tracing::field::Empty,
            total_fee = tracing::field::Empty
        ),
        err
    )]
    async fn quote(
        &self,
        cart: Cart,
        destination: String,
    ) -> Result<FeeBreakdown, DeliveryFeesServiceError> {
        let breakdown = self.calculator.calculate(&cart, &destination).await?;

        let span = Span::current();

        span.record("stores", breakdown.per_store().len());
        span.record("total_fee", breakdown.total_fee().to_minor_units());

        for entry in breakdown.per_store() {
            debug!(
                store = %entry.store,
                origin_city = %entry.origin_city,
                fee = entry.fee.to_minor_units(),
                free_delivery_applied = entry.free_delivery_applied,
                "priced store delivery"
            );
        }

        info!(
            total_fee = breakdown.total_fee().to_minor_units(),
            has_non_local_origin = breakdown.has_non_local_origin(),
            "quoted delivery fees"
        );

        Ok(breakdown)
    }

    #[tracing::instrument(
        name = "deliveries.service.route_fee",
        skip(self),
        fields(step = tracing::field::Empty),
        err
    )]
    async fn route_fee(
        &self,
        from_city: String,
        to_region: String,
    ) -> Result<ResolvedFee, DeliveryFeesServiceError> {
        let resolved = self.calculator.resolve_route(&from_city, &to_region).await?;

        Span::current().record("step", tracing::field::display(resolved.source));

        Ok(resolved)
    }
}

#[automock]
#[async_trait]
pub trait DeliveryFeesService: Send + Sync {
    /// Calculates per-store delivery fees for a cart shipped to `destination`.
    async fn quote(
        &self,
        cart: Cart,
        destination: String,
    ) -> Result<FeeBreakdown, DeliveryFeesServiceError>;

    /// Resolves the fee of a single route, without free-delivery logic.
    async fn route_fee(
        &self,
        from_city: String,
        to_region: String,
    ) -> Result<ResolvedFee, DeliveryFeesServiceError>;
}
