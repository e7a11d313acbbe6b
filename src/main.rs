use std::net::SocketAddr;

use biophotonix::services::catalog::FruitCatalogProvider;
use biophotonix::{create_router, Config, SharedState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 1. Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biophotonix=info,tower_http=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Load configuration
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to load config.json ({}), using defaults", e);
            Config::default()
        }
    };
    tracing::info!(
        "Configuration loaded: port {}, top {} recommendations, cache ttl {}s",
        config.server.port,
        config.recommendation_count,
        config.cache.ttl_secs
    );

    // 3. Shared state: validated catalog, mock weather, memo caches
    let state = match SharedState::new(config.clone()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to build planner state: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Catalog ready: {} fruits", state.app.catalog.fruits().len());

    // 4. Start Axum HTTP server
    let app = create_router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("API Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    if let Err(e) = axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("Server error: {}", e);
    }
}
