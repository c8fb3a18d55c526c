use std::time::Duration;

use anyhow::bail;
use clap::Args;
use manhattan_core::{
    config::ManhattanConfig,
    geopoint::GeoPoint,
    profile::TravelMode,
    service::{RouteRequest, RouteService},
    synthesizer::ManhattanSynthesizer,
};
use manhattan_osrm::{OsrmRouteClient, OsrmRouteClientParams};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct RouteArgs {
    /// Origin as "lat,lng"
    #[arg(short, long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    from: GeoPoint,

    /// Destination as "lat,lng"
    #[arg(short, long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    to: GeoPoint,

    /// auto, bici, peaton or manhattan
    #[arg(short, long, default_value = "manhattan")]
    mode: TravelMode,

    /// Overrides MANHATTAN_OSRM_URL
    #[arg(long)]
    osrm_url: Option<String>,

    /// Provider timeout in seconds, overrides MANHATTAN_PROVIDER_TIMEOUT_SECS
    #[arg(long)]
    timeout: Option<u64>,
}

pub async fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let config = ManhattanConfig::from_env()?;

    let client = OsrmRouteClient::new(OsrmRouteClientParams {
        osrm_url: args
            .osrm_url
            .unwrap_or_else(|| config.osrm_url.clone()),
        timeout: args
            .timeout
            .map(Duration::from_secs)
            .unwrap_or(config.provider_timeout),
    })?;

    info!(
        "Routing {:?} -> {:?} ({}) via {}",
        args.from,
        args.to,
        args.mode,
        client.osrm_url()
    );

    let service = RouteService::new(
        client,
        ManhattanSynthesizer::new(config.synthesizer_params()),
    );

    let body = service
        .compute(&RouteRequest {
            origin: args.from,
            destination: args.to,
            mode: args.mode,
        })
        .await;

    println!("{}", serde_json::to_string_pretty(&body)?);

    if !body.is_viable() {
        bail!("No route could be computed: {}", body.message);
    }

    Ok(())
}
