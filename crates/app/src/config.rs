//! Application configuration

use carriage::config::{DEFAULT_CANONICAL_CITY, DEFAULT_DELIVERY_FEE_MINOR, FeeConfig};
use clap::Args;
use rusty_money::{Money, iso};
use thiserror::Error;

/// Invalid fee settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Currency code not known to `rusty_money`
    #[error("unknown fee currency: {0}")]
    UnknownCurrency(String),

    /// Default fee below zero
    #[error("default delivery fee must not be negative, got {0}")]
    NegativeDefaultFee(i64),

    /// Canonical city is blank
    #[error("canonical city must not be blank")]
    BlankCanonicalCity,
}

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

/// Fee calculation settings.
#[derive(Debug, Clone, Args)]
pub struct FeeSettings {
    /// Fee, in minor units, charged when no route matches
    #[arg(long, env = "DEFAULT_DELIVERY_FEE", default_value_t = DEFAULT_DELIVERY_FEE_MINOR)]
    pub default_fee: i64,

    /// Origin city for stores without one
    #[arg(long, env = "CANONICAL_CITY", default_value = DEFAULT_CANONICAL_CITY)]
    pub canonical_city: String,

    /// ISO currency code all amounts are stored in
    #[arg(long, env = "FEE_CURRENCY", default_value = "DZD")]
    pub fee_currency: String,
}

impl FeeSettings {
    /// Validate the settings and build the calculator configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown currency, a negative default fee or a blank city.
    pub fn fee_config(&self) -> Result<FeeConfig, ConfigError> {
        let currency = iso::find(self.fee_currency.trim())
            .ok_or_else(|| ConfigError::UnknownCurrency(self.fee_currency.clone()))?;

        if self.default_fee < 0 {
            return Err(ConfigError::NegativeDefaultFee(self.default_fee));
        }

        let canonical_city = self.canonical_city.trim();

        if canonical_city.is_empty() {
            return Err(ConfigError::BlankCanonicalCity);
        }

        Ok(FeeConfig::new(
            Money::from_minor(self.default_fee, currency),
            canonical_city,
        ))
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}
