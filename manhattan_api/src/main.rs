mod app;
mod error;
mod route;
mod state;

use crate::app::build_router;
use crate::state::AppState;
use axum::serve;
use manhattan_core::config::ManhattanConfig;
use manhattan_core::service::RouteService;
use manhattan_core::synthesizer::ManhattanSynthesizer;
use manhattan_osrm::{OsrmRouteClient, OsrmRouteClientParams};
use std::sync::Arc;
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ManhattanConfig::from_env()?;

    let client = OsrmRouteClient::new(OsrmRouteClientParams {
        osrm_url: config.osrm_url.clone(),
        timeout: config.provider_timeout,
    })?;

    let state = Arc::new(AppState {
        service: RouteService::new(
            client,
            ManhattanSynthesizer::new(config.synthesizer_params()),
        ),
    });

    let app = build_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind((config.bind_addr.as_str(), config.port)).await?;

    info!(
        "Listening on {}:{} (OSRM at {})",
        config.bind_addr, config.port, config.osrm_url
    );

    serve(listener, app).await?;

    Ok(())
}
