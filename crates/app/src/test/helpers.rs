//! Test Helpers

use sqlx::query;
use uuid::Uuid;

use crate::test::TestContext;

/// Store row to seed.
#[derive(Debug, Clone)]
pub(crate) struct NewStore {
    id: String,
    name: String,
    origin_city: Option<String>,
    free_delivery_threshold: Option<i64>,
}

impl NewStore {
    pub(crate) fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            origin_city: None,
            free_delivery_threshold: None,
        }
    }

    pub(crate) fn origin(mut self, city: &str) -> Self {
        self.origin_city = Some(city.to_string());
        self
    }

    /// Enables free delivery from `threshold` minor units.
    pub(crate) fn free_from(mut self, threshold: i64) -> Self {
        self.free_delivery_threshold = Some(threshold);
        self
    }
}

/// Fee route row to seed.
#[derive(Debug, Clone)]
pub(crate) struct NewFeeRoute {
    from_city: String,
    to_region: String,
    base_fee: i64,
    is_active: bool,
}

impl NewFeeRoute {
    pub(crate) fn new(from_city: &str, to_region: &str, base_fee: i64) -> Self {
        Self {
            from_city: from_city.to_string(),
            to_region: to_region.to_string(),
            base_fee,
            is_active: true,
        }
    }

    pub(crate) fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl TestContext {
    pub(crate) async fn create_store(&self, store: NewStore) -> Result<(), sqlx::Error> {
        query(
            "INSERT INTO stores \
             (id, name, origin_city, offers_free_delivery, free_delivery_threshold) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&store.id)
        .bind(&store.name)
        .bind(&store.origin_city)
        .bind(store.free_delivery_threshold.is_some())
        .bind(store.free_delivery_threshold)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }

    pub(crate) async fn create_route(&self, route: NewFeeRoute) -> Result<Uuid, sqlx::Error> {
        let uuid = Uuid::now_v7();

        query(
            "INSERT INTO fee_routes (uuid, from_city, to_region, base_fee, is_active) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(uuid)
        .bind(&route.from_city)
        .bind(&route.to_region)
        .bind(route.base_fee)
        .bind(route.is_active)
        .execute(self.db.pool())
        .await?;

        Ok(uuid)
    }

    /// Writes a raw negative fee, bypassing the check constraint, to exercise decode guards.
    pub(crate) async fn corrupt_route_fee(
        &self,
        uuid: Uuid,
        base_fee: i64,
    ) -> Result<(), sqlx::Error> {
        query("ALTER TABLE fee_routes DROP CONSTRAINT IF EXISTS fee_routes_base_fee_check")
            .execute(self.db.pool())
            .await?;

        query("UPDATE fee_routes SET base_fee = $2 WHERE uuid = $1")
            .bind(uuid)
            .bind(base_fee)
            .execute(self.db.pool())
            .await?;

        Ok(())
    }
}
