//! Fee routes

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::money::{exact_minor_units, is_negative};

/// Destination region that matches any region for a given origin city.
pub const WILDCARD_REGION: &str = "Other";

/// Errors raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two active routes share the same origin and destination.
    #[error("an active route from {0} to {1} already exists")]
    DuplicateActiveRoute(String, String),

    /// A route was configured with a negative fee.
    #[error("route from {0} to {1} has a negative fee")]
    NegativeFee(String, String),

    /// A route fee is not a whole number of minor units.
    #[error("route from {0} to {1} has a fee that is not whole minor units")]
    FractionalFee(String, String),
}

/// A configured rate from an origin city to a destination region.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeRoute {
    /// Origin city
    pub from_city: String,

    /// Destination region, or [`WILDCARD_REGION`]
    pub to_region: String,

    /// Fee charged for the route
    pub base_fee: Money<'static, Currency>,

    /// Inactive routes are treated as absent
    pub is_active: bool,
}

impl FeeRoute {
    /// Create an active route.
    pub fn new(
        from_city: impl Into<String>,
        to_region: impl Into<String>,
        base_fee: Money<'static, Currency>,
    ) -> Self {
        Self {
            from_city: from_city.into(),
            to_region: to_region.into(),
            base_fee,
            is_active: true,
        }
    }

    /// Create a wildcard route covering every region without an exact route.
    pub fn wildcard(from_city: impl Into<String>, base_fee: Money<'static, Currency>) -> Self {
        Self::new(from_city, WILDCARD_REGION, base_fee)
    }

    /// Mark the route as inactive.
    #[must_use]
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Whether this route is the wildcard for its origin.
    pub fn is_wildcard(&self) -> bool {
        self.to_region == WILDCARD_REGION
    }
}

/// In-memory set of fee routes keyed by `(from_city, to_region)`.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    active: FxHashMap<(String, String), Money<'static, Currency>>,
    inactive: Vec<FeeRoute>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a list of routes.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] if a fee is invalid or two active routes share a key.
    pub fn with_routes(
        routes: impl IntoIterator<Item = FeeRoute>,
    ) -> Result<Self, RouteTableError> {
        let mut table = Self::new();

        for route in routes {
            table.insert(route)?;
        }

        Ok(table)
    }

    /// Add a route to the table.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] if the fee is negative or not whole minor units, or
    /// an active route with the same key already exists.
    pub fn insert(&mut self, route: FeeRoute) -> Result<(), RouteTableError> {
        if is_negative(&route.base_fee) {
            return Err(RouteTableError::NegativeFee(route.from_city, route.to_region));
        }

        if exact_minor_units(&route.base_fee).is_none() {
            return Err(RouteTableError::FractionalFee(route.from_city, route.to_region));
        }

        if !route.is_active {
            self.inactive.push(route);

            return Ok(());
        }

        let key = (route.from_city, route.to_region);

        if self.active.contains_key(&key) {
            return Err(RouteTableError::DuplicateActiveRoute(key.0, key.1));
        }

        self.active.insert(key, route.base_fee);

        Ok(())
    }

    /// Fee of the active route for the given pair.
    pub fn active_fee(&self, from_city: &str, to_region: &str) -> Option<Money<'static, Currency>> {
        self.active
            .get(&(from_city.to_string(), to_region.to_string()))
            .copied()
    }

    /// Number of active routes
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether the table holds no active route
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of routes kept but ignored for resolution
    pub fn inactive_len(&self) -> usize {
        self.inactive.len()
    }
}
