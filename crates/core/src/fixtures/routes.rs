//! Route Fixtures

use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, amounts::parse_amount},
    routes::FeeRoute,
};

/// Route Fixture
#[derive(Debug, Deserialize)]
pub struct RouteFixture {
    /// Origin city
    pub from: String,

    /// Destination region, or `Other` for the wildcard
    pub to: String,

    /// Route fee (e.g., "4.00")
    pub fee: String,

    /// Inactive routes are loaded but ignored
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl RouteFixture {
    /// Convert into a fee route.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::InvalidAmount`] if the fee cannot be parsed.
    pub fn into_route(self, currency: &'static Currency) -> Result<FeeRoute, FixtureError> {
        let mut route = FeeRoute::new(self.from, self.to, parse_amount(&self.fee, currency)?);
        route.is_active = self.active;

        Ok(route)
    }
}
