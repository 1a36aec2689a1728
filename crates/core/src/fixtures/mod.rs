//! Fixtures
//!
//! A fixture is a single YAML document describing fee configuration, store policies,
//! fee routes and a cart. Every section is optional, so the same format also serves as a
//! plain cart file.

use std::{fs, path::Path, str::FromStr};

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    calculator::DeliveryFeeCalculator,
    cart::{Cart, CartError},
    config::{DEFAULT_CANONICAL_CITY, DEFAULT_DELIVERY_FEE_MINOR, FeeConfig},
    fixtures::{
        amounts::{parse_amount, parse_currency},
        cart::CartLineFixture,
        routes::RouteFixture,
        stores::StoreFixture,
    },
    routes::{RouteTable, RouteTableError},
    sources::InMemoryStorePolicies,
};

pub mod amounts;
pub mod cart;
pub mod routes;
pub mod stores;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid amount format
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Invalid cart line
    #[error("Invalid cart: {0}")]
    Cart(#[from] CartError),

    /// Invalid route set
    #[error("Invalid routes: {0}")]
    Routes(#[from] RouteTableError),
}

/// Raw YAML document
#[derive(Debug, Deserialize)]
struct FixtureDocument {
    #[serde(default = "default_currency")]
    currency: String,

    #[serde(default)]
    default_fee: Option<String>,

    #[serde(default)]
    canonical_city: Option<String>,

    #[serde(default)]
    stores: FxHashMap<String, StoreFixture>,

    #[serde(default)]
    routes: Vec<RouteFixture>,

    #[serde(default)]
    cart: Vec<CartLineFixture>,
}

fn default_currency() -> String {
    "DZD".to_string()
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    config: FeeConfig,
    policies: InMemoryStorePolicies,
    routes: RouteTable,
    cart: Cart,
}

impl Fixture {
    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any section is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        contents.parse()
    }

    fn from_document(document: FixtureDocument) -> Result<Self, FixtureError> {
        let currency = parse_currency(&document.currency)?;

        let default_fee = match document.default_fee.as_deref() {
            Some(amount) => parse_amount(amount, currency)?,
            None => Money::from_minor(DEFAULT_DELIVERY_FEE_MINOR, currency),
        };

        let canonical_city = document
            .canonical_city
            .unwrap_or_else(|| DEFAULT_CANONICAL_CITY.to_string());

        let policies = document
            .stores
            .into_iter()
            .map(|(key, store)| store.into_policy(key, &canonical_city, currency))
            .collect::<Result<Vec<_>, _>>()?;

        let routes = document
            .routes
            .into_iter()
            .map(|route| route.into_route(currency))
            .collect::<Result<Vec<_>, _>>()?;

        let lines = document
            .cart
            .into_iter()
            .map(|line| line.into_line(currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config: FeeConfig::new(default_fee, canonical_city),
            policies: InMemoryStorePolicies::with_policies(policies),
            routes: RouteTable::with_routes(routes)?,
            cart: Cart::with_lines(lines, currency)?,
        })
    }

    /// Fee configuration
    pub fn config(&self) -> &FeeConfig {
        &self.config
    }

    /// Store policies
    pub fn policies(&self) -> &InMemoryStorePolicies {
        &self.policies
    }

    /// Fee routes
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Currency every amount in the fixture is expressed in
    pub fn currency(&self) -> &'static Currency {
        self.cart.currency()
    }

    /// Calculator over this fixture's policies and routes.
    pub fn calculator(&self) -> DeliveryFeeCalculator<&InMemoryStorePolicies, &RouteTable> {
        DeliveryFeeCalculator::new(self.config.clone(), &self.policies, &self.routes)
    }

    /// Replace the cart, e.g. with one loaded from a separate file.
    #[must_use]
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document: FixtureDocument = serde_norway::from_str(s)?;

        Self::from_document(document)
    }
}
