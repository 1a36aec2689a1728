//! Delivery fees service errors.

use carriage::{calculator::DeliveryFeeError, cart::CartError};
use rusty_money::MoneyError;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryFeesServiceError {
    #[error("invalid data")]
    InvalidData(#[source] Error),

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("cart has currency {0}, but fees are configured in {1}")]
    CurrencyMismatch(&'static str, &'static str),

    #[error("delivery fee does not fit in whole minor units")]
    UnrepresentableFee,

    #[error("invalid cart")]
    Cart(#[from] CartError),

    #[error("fee arithmetic failed")]
    Money(#[from] MoneyError),
}

impl From<Error> for DeliveryFeesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::ColumnDecode { .. }) {
            return Self::InvalidData(error);
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => {
                Self::InvalidData(error)
            }
            _ => Self::Sql(error),
        }
    }
}

impl From<DeliveryFeeError<Error, Error>> for DeliveryFeesServiceError {
    fn from(error: DeliveryFeeError<Error, Error>) -> Self {
        match error {
            DeliveryFeeError::StorePolicies(source) | DeliveryFeeError::FeeRoutes(source) => {
                source.into()
            }
            DeliveryFeeError::CurrencyMismatch(cart, config) => {
                Self::CurrencyMismatch(cart, config)
            }
            DeliveryFeeError::UnrepresentableFee => Self::UnrepresentableFee,
            DeliveryFeeError::Cart(source) => Self::Cart(source),
            DeliveryFeeError::Money(source) => Self::Money(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use carriage::stores::StoreId;

    use super::*;

    #[test]
    fn pool_errors_are_storage_errors() {
        let error = DeliveryFeesServiceError::from(DeliveryFeeError::<Error, Error>::FeeRoutes(
            Error::PoolTimedOut,
        ));

        assert!(
            matches!(error, DeliveryFeesServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn decode_errors_are_invalid_data() {
        let error = DeliveryFeesServiceError::from(Error::ColumnDecode {
            index: "base_fee".to_string(),
            source: "negative".into(),
        });

        assert!(
            matches!(error, DeliveryFeesServiceError::InvalidData(_)),
            "expected InvalidData, got {error:?}"
        );
    }

    #[test]
    fn calculator_errors_keep_their_meaning() {
        let mismatch = DeliveryFeesServiceError::from(
            DeliveryFeeError::<Error, Error>::CurrencyMismatch("EUR", "DZD"),
        );
        let cart = DeliveryFeesServiceError::from(DeliveryFeeError::<Error, Error>::Cart(
            CartError::ZeroQuantity(StoreId::from("S1")),
        ));

        assert!(matches!(
            mismatch,
            DeliveryFeesServiceError::CurrencyMismatch("EUR", "DZD")
        ));
        let unrepresentable =
            DeliveryFeesServiceError::from(DeliveryFeeError::<Error, Error>::UnrepresentableFee);

        assert!(matches!(
            cart,
            DeliveryFeesServiceError::Cart(CartError::ZeroQuantity(_))
        ));
        assert!(matches!(
            unrepresentable,
            DeliveryFeesServiceError::UnrepresentableFee
        ));
    }
}
