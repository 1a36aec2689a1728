//! Cart

use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    money::{exact_minor_units, is_negative},
    stores::StoreId,
};

/// Errors related to cart construction or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// A line's currency differs from the cart currency (index, line currency, cart currency).
    #[error("Line {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// A line was created with a negative unit price.
    #[error("Unit price for store {0} is negative")]
    NegativePrice(StoreId),

    /// A line was created with a quantity of zero.
    #[error("Quantity for store {0} must be at least 1")]
    ZeroQuantity(StoreId),

    /// A unit price has more precision than the currency's minor unit.
    #[error("Unit price for store {0} is not a whole number of minor units")]
    FractionalPrice(StoreId),

    /// A line total or store subtotal does not fit in minor units.
    #[error("Total for store {0} overflows")]
    Overflow(StoreId),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// One line in the shopping cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    store: StoreId,
    unit_price: Money<'static, Currency>,
    quantity: u32,
}

impl CartLine {
    /// Creates a new cart line.
    ///
    /// # Errors
    ///
    /// - [`CartError::NegativePrice`]: the unit price is below zero.
    /// - [`CartError::FractionalPrice`]: the unit price is not whole minor units.
    /// - [`CartError::ZeroQuantity`]: the quantity is zero.
    pub fn new(
        store: impl Into<StoreId>,
        unit_price: Money<'static, Currency>,
        quantity: u32,
    ) -> Result<Self, CartError> {
        let store = store.into();

        if is_negative(&unit_price) {
            return Err(CartError::NegativePrice(store));
        }

        if exact_minor_units(&unit_price).is_none() {
            return Err(CartError::FractionalPrice(store));
        }

        if quantity == 0 {
            return Err(CartError::ZeroQuantity(store));
        }

        Ok(Self {
            store,
            unit_price,
            quantity,
        })
    }

    /// Store selling this line
    pub fn store(&self) -> &StoreId {
        &self.store
    }

    /// Price of a single unit
    pub fn unit_price(&self) -> &Money<'static, Currency> {
        &self.unit_price
    }

    /// Number of units
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if the total does not fit in minor units.
    pub fn line_total(&self) -> Result<Money<'static, Currency>, CartError> {
        let total = exact_minor_units(&self.unit_price)
            .and_then(|unit| unit.checked_mul(i64::from(self.quantity)))
            .ok_or_else(|| CartError::Overflow(self.store.clone()))?;

        Ok(Money::from_minor(total, self.unit_price.currency()))
    }
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Create a new cart with the given lines.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if there was a currency mismatch error.
    pub fn with_lines(
        lines: impl Into<Vec<CartLine>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let lines = lines.into();

        lines.iter().enumerate().try_for_each(|(i, line)| {
            let line_currency = line.unit_price().currency();
            if line_currency == currency {
                Ok(())
            } else {
                Err(CartError::CurrencyMismatch(
                    i,
                    line_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Cart { lines, currency })
    }

    /// Lines in the order they were added
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Sum line totals per store, in the order stores first appear in the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if a line total overflows or money arithmetic fails.
    pub fn store_subtotals(&self) -> Result<StoreSubtotals, CartError> {
        let mut subtotals = StoreSubtotals::default();

        for line in &self.lines {
            subtotals.add(line.store(), line.line_total()?)?;
        }

        Ok(subtotals)
    }
}

/// Cart value grouped by store, in first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct StoreSubtotals {
    entries: SmallVec<[(StoreId, Money<'static, Currency>); 4]>,
    positions: FxHashMap<StoreId, usize>,
}

impl StoreSubtotals {
    fn add(&mut self, store: &StoreId, amount: Money<'static, Currency>) -> Result<(), CartError> {
        if let Some(entry) = self
            .positions
            .get(store)
            .and_then(|&idx| self.entries.get_mut(idx))
        {
            let sum = entry.1.add(amount)?;

            if exact_minor_units(&sum).is_none() {
                return Err(CartError::Overflow(store.clone()));
            }

            entry.1 = sum;

            return Ok(());
        }

        self.positions.insert(store.clone(), self.entries.len());
        self.entries.push((store.clone(), amount));

        Ok(())
    }

    /// Number of distinct stores
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no store is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subtotal for a single store
    pub fn get(&self, store: &StoreId) -> Option<&Money<'static, Currency>> {
        self.positions
            .get(store)
            .and_then(|&idx| self.entries.get(idx))
            .map(|(_, amount)| amount)
    }

    /// Distinct stores in first-encounter order
    pub fn stores(&self) -> impl Iterator<Item = &StoreId> {
        self.entries.iter().map(|(store, _)| store)
    }

    /// Store and subtotal pairs in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&StoreId, &Money<'static, Currency>)> {
        self.entries.iter().map(|(store, amount)| (store, amount))
    }
}
