//! Amount Fixtures

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{Currency, DZD, EUR, GBP, MAD, TND, USD},
};

use crate::{fixtures::FixtureError, money::exact_minor_units};

/// Look up a supported ISO currency by its alphabetic code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for codes outside the supported set.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "DZD" => Ok(DZD),
        "MAD" => Ok(MAD),
        "TND" => Ok(TND),
        "EUR" => Ok(EUR),
        "USD" => Ok(USD),
        "GBP" => Ok(GBP),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a decimal amount in major units (e.g. "25.00") into money of `currency`.
///
/// # Errors
///
/// Returns [`FixtureError::InvalidAmount`] if the string is not a decimal, is negative,
/// has more decimal places than the currency's minor unit, or does not fit in `i64`.
pub fn parse_amount(
    s: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, FixtureError> {
    let amount = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidAmount(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidAmount(s.to_string()));
    }

    let minor_units = exact_minor_units(&Money::from_decimal(amount, currency))
        .ok_or_else(|| FixtureError::InvalidAmount(s.to_string()))?;

    Ok(Money::from_minor(minor_units, currency))
}
