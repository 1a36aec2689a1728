//! Fee Routes Repository

use sqlx::{Postgres, Transaction, query_scalar};

use crate::domain::amounts::non_negative;

const FIND_ACTIVE_ROUTE_FEE_SQL: &str = include_str!("sql/find_active_route_fee.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFeeRoutesRepository;

impl PgFeeRoutesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Base fee, in minor units, of the active route for the pair.
    pub(crate) async fn find_active_route_fee(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        from_city: &str,
        to_region: &str,
    ) -> Result<Option<i64>, sqlx::Error> {
        let fee: Option<i64> = query_scalar(FIND_ACTIVE_ROUTE_FEE_SQL)
            .bind(from_city)
            .bind(to_region)
            .fetch_optional(&mut **tx)
            .await?;

        fee.map(|amount| non_negative(amount, "base_fee")).transpose()
    }
}
