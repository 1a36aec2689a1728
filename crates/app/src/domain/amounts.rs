//! Amount column decoding

use sqlx::{Row, postgres::PgRow};

/// Read a nullable `BIGINT` amount in minor units, rejecting negatives.
pub(crate) fn try_get_optional_amount(row: &PgRow, col: &str) -> Result<Option<i64>, sqlx::Error> {
    let amount: Option<i64> = row.try_get(col)?;

    amount.map(|value| non_negative(value, col)).transpose()
}

pub(crate) fn non_negative(amount: i64, col: &str) -> Result<i64, sqlx::Error> {
    u64::try_from(amount)
        .map(|_| amount)
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}
