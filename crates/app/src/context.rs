//! App Context

use std::sync::Arc;

use carriage::config::FeeConfig;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::deliveries::{DeliveryFeesService, PgDeliveryFeesService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub deliveries: Arc<dyn DeliveryFeesService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str, config: FeeConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), config))
    }

    /// Build application context over an existing database handle.
    #[must_use]
    pub fn from_db(db: Db, config: FeeConfig) -> Self {
        Self {
            deliveries: Arc::new(PgDeliveryFeesService::new(db, config)),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
