//! Fee routes backed by `PostgreSQL`.

use async_trait::async_trait;
use carriage::sources::FeeRoutes;
use rusty_money::{Money, iso::Currency};

use crate::{database::Db, domain::routes::repository::PgFeeRoutesRepository};

#[derive(Debug, Clone)]
pub struct PgFeeRoutes {
    db: Db,
    repository: PgFeeRoutesRepository,
    currency: &'static Currency,
}

impl PgFeeRoutes {
    #[must_use]
    pub fn new(db: Db, currency: &'static Currency) -> Self {
        Self {
            db,
            repository: PgFeeRoutesRepository::new(),
            currency,
        }
    }
}

#[async_trait]
impl FeeRoutes for PgFeeRoutes {
    type Error = sqlx::Error;

    async fn active_route_fee(
        &self,
        from_city: &str,
        to_region: &str,
    ) -> Result<Option<Money<'static, Currency>>, Self::Error> {
        let mut tx = self.db.begin_transaction().await?;

        let fee = self
            .repository
            .find_active_route_fee(&mut tx, from_city, to_region)
            .await?;

        tx.commit().await?;

        Ok(fee.map(|minor| Money::from_minor(minor, self.currency)))
    }
}
