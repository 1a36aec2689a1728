//! Carriage prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    breakdown::{FeeBreakdown, FeeSummary, StoreFee, StoreFeeSummary},
    calculator::{DeliveryFeeCalculator, DeliveryFeeError},
    cart::{Cart, CartError, CartLine, StoreSubtotals},
    config::FeeConfig,
    fixtures::{Fixture, FixtureError},
    resolution::{ResolutionStep, ResolvedFee, RouteResolver},
    routes::{FeeRoute, RouteTable, RouteTableError, WILDCARD_REGION},
    sources::{FeeRoutes, InMemoryStorePolicies, StorePolicies},
    stores::{StoreId, StorePolicy},
};
