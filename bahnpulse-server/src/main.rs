use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bahnpulse_server::config::ServerConfig;
use bahnpulse_server::generator::SimulatedProvider;
use bahnpulse_server::stations::StationCatalog;
use bahnpulse_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bahnpulse_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    // Load stations (fail fast if the file is unusable)
    let catalog = match &config.stations_path {
        Some(path) => {
            info!(path = %path.display(), "loading stations from file");
            StationCatalog::from_json_file(path)?
        }
        None => StationCatalog::germany(),
    };
    info!(stations = catalog.len(), "station catalog ready");
    let catalog = Arc::new(catalog);

    let generator_config = Arc::new(config.generator_config());
    let provider = match config.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            SimulatedProvider::with_seed(catalog.clone(), generator_config, seed)
        }
        None => SimulatedProvider::new(catalog.clone(), generator_config),
    };

    let state = AppState::new(catalog, provider);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("BahnPulse listening on http://{}", config.addr);
    info!("API endpoints: /api/stations/search, /api/journeys, /api/departures");

    axum::serve(listener, app).await?;
    Ok(())
}
