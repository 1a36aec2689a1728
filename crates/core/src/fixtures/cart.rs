//! Cart Fixtures

use rusty_money::iso::Currency;
use serde::Deserialize;

use crate::{
    cart::CartLine,
    fixtures::{FixtureError, amounts::parse_amount},
};

/// Cart Line Fixture
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Store key
    pub store: String,

    /// Unit price (e.g., "10.00")
    pub unit_price: String,

    /// Number of units
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl CartLineFixture {
    /// Convert into a cart line.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the price cannot be parsed or the line is invalid.
    pub fn into_line(self, currency: &'static Currency) -> Result<CartLine, FixtureError> {
        let price = parse_amount(&self.unit_price, currency)?;

        Ok(CartLine::new(self.store, price, self.quantity)?)
    }
}
