use carriage::fixtures::Fixture;
use clap::{Args, Parser, Subcommand};

use carriage_app::{
    config::{DatabaseConfig, FeeSettings, LoggingConfig},
    context::AppContext,
};

mod quote;
mod route;

#[derive(Debug, Parser)]
#[command(name = "carriage-app", about = "Carriage delivery fee CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Price delivery for a cart
    Quote(quote::QuoteArgs),

    /// Resolve the fee of a single route
    Route(route::RouteArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Quote(args) => quote::run(args).await,
            Commands::Route(args) => route::run(args).await,
        }
    }
}

/// Where store policies and fee routes are read from.
#[derive(Debug, Args)]
pub(crate) struct SourceArgs {
    /// Offline YAML fixture with fee settings, stores and routes; skips the database
    #[arg(long, conflicts_with_all = ["default_fee", "canonical_city", "fee_currency"])]
    fixture: Option<String>,

    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    fees: FeeSettings,
}

pub(crate) enum Source {
    Fixture(Fixture),
    Database(AppContext),
}

impl SourceArgs {
    pub(crate) async fn open(self) -> Result<Source, String> {
        if let Some(path) = self.fixture {
            let fixture = Fixture::from_path(&path)
                .map_err(|error| format!("failed to load fixture {path}: {error}"))?;

            return Ok(Source::Fixture(fixture));
        }

        let database_url = self
            .database
            .database_url
            .ok_or_else(|| "either --fixture or --database-url is required".to_string())?;

        let config = self
            .fees
            .fee_config()
            .map_err(|error| format!("invalid fee settings: {error}"))?;

        let context = AppContext::from_database_url(&database_url, config)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        Ok(Source::Database(context))
    }
}
