//! Minor-unit conversions

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// Minor units of `amount`, or `None` if it carries sub-minor precision or leaves `i64` range.
pub(crate) fn exact_minor_units(amount: &Money<'_, Currency>) -> Option<i64> {
    let scale = 10_i64.checked_pow(amount.currency().exponent)?;
    let scaled = amount.amount().checked_mul(Decimal::from(scale))?;

    if scaled.fract().is_zero() {
        scaled.to_i64()
    } else {
        None
    }
}

/// Whether `amount` is strictly below zero, however small.
pub(crate) fn is_negative(amount: &Money<'_, Currency>) -> bool {
    *amount.amount() < Decimal::ZERO
}
