use carriage::{cart::Cart, fixtures::Fixture};
use clap::Args;
use tracing::debug;

use super::{Source, SourceArgs};

#[derive(Debug, Args)]
pub(crate) struct QuoteArgs {
    /// Destination region (wilaya)
    #[arg(long)]
    destination: String,

    /// YAML cart file; defaults to the fixture's cart
    #[arg(long)]
    cart: Option<String>,

    #[command(flatten)]
    pub(super) source: SourceArgs,
}

pub(crate) async fn run(args: QuoteArgs) -> Result<(), String> {
    let cart = args.cart.as_deref().map(load_cart).transpose()?;

    let breakdown = match args.source.open().await? {
        Source::Fixture(fixture) => {
            let fixture = match cart {
                Some(cart) => fixture.with_cart(cart),
                None => fixture,
            };

            fixture
                .calculator()
                .calculate(fixture.cart(), &args.destination)
                .await
                .map_err(|error| format!("failed to quote delivery: {error}"))?
        }
        Source::Database(context) => {
            let cart = cart.ok_or_else(|| "--cart is required without --fixture".to_string())?;

            context
                .deliveries
                .quote(cart, args.destination)
                .await
                .map_err(|error| format!("failed to quote delivery: {error}"))?
        }
    };

    debug!(stores = breakdown.per_store().len(), "quote ready");

    let output = serde_json::to_string_pretty(&breakdown.summary())
        .map_err(|error| format!("failed to encode quote: {error}"))?;

    println!("{output}");

    Ok(())
}

fn load_cart(path: &str) -> Result<Cart, String> {
    Fixture::from_path(path)
        .map(|fixture| fixture.cart().clone())
        .map_err(|error| format!("failed to load cart {path}: {error}"))
}
