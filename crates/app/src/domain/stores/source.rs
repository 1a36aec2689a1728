//! Store policies backed by `PostgreSQL`.

use async_trait::async_trait;
use carriage::{
    sources::StorePolicies,
    stores::{StoreId, StorePolicy},
};
use rusty_money::iso::Currency;

use crate::{database::Db, domain::stores::repository::PgStoresRepository};

#[derive(Debug, Clone)]
pub struct PgStorePolicies {
    db: Db,
    repository: PgStoresRepository,
    canonical_city: String,
    currency: &'static Currency,
}

impl PgStorePolicies {
    #[must_use]
    pub fn new(db: Db, canonical_city: impl Into<String>, currency: &'static Currency) -> Self {
        Self {
            db,
            repository: PgStoresRepository::new(),
            canonical_city: canonical_city.into(),
            currency,
        }
    }
}

#[async_trait]
impl StorePolicies for PgStorePolicies {
    type Error = sqlx::Error;

    async fn store_policies(&self, stores: &[StoreId]) -> Result<Vec<StorePolicy>, Self::Error> {
        let ids: Vec<String> = stores.iter().map(ToString::to_string).collect();

        let mut tx = self.db.begin_transaction().await?;

        let records = self.repository.find_store_policies(&mut tx, &ids).await?;

        tx.commit().await?;

        Ok(records
            .into_iter()
            .map(|record| record.into_policy(&self.canonical_city, self.currency))
            .collect())
    }
}
