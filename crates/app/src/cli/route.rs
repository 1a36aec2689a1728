use clap::Args;

use super::{Source, SourceArgs};

#[derive(Debug, Args)]
pub(crate) struct RouteArgs {
    /// Origin city
    #[arg(long)]
    from: String,

    /// Destination region
    #[arg(long)]
    to: String,

    #[command(flatten)]
    source: SourceArgs,
}

pub(crate) async fn run(args: RouteArgs) -> Result<(), String> {
    let resolved = match args.source.open().await? {
        Source::Fixture(fixture) => fixture
            .calculator()
            .resolve_route(&args.from, &args.to)
            .await
            .map_err(|error| format!("failed to resolve route: {error}"))?,
        Source::Database(context) => context
            .deliveries
            .route_fee(args.from, args.to)
            .await
            .map_err(|error| format!("failed to resolve route: {error}"))?,
    };

    println!("fee: {}", resolved.fee.to_minor_units());
    println!("currency: {}", resolved.fee.currency().iso_alpha_code);
    println!("step: {}", resolved.source);

    Ok(())
}
