//! Stores Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{amounts::try_get_optional_amount, stores::records::StorePolicyRecord};

const FIND_STORE_POLICIES_SQL: &str = include_str!("sql/find_store_policies.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgStoresRepository;

impl PgStoresRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_store_policies(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        stores: &[String],
    ) -> Result<Vec<StorePolicyRecord>, sqlx::Error> {
        query_as::<Postgres, StorePolicyRecord>(FIND_STORE_POLICIES_SQL)
            .bind(stores)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StorePolicyRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            origin_city: row.try_get("origin_city")?,
            offers_free_delivery: row
                .try_get::<Option<bool>, _>("offers_free_delivery")?
                .unwrap_or(false),
            free_delivery_threshold: try_get_optional_amount(row, "free_delivery_threshold")?,
        })
    }
}
