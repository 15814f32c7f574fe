// API Server Binary Entry Point
//
// Purpose: Start the Axum API server around the footprint scorer
// Usage: cargo run --bin api_server

use footprint_scorer_rust::{create_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "footprint_scorer_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  PREDICTOR: {} {:?}", config.predictor.program, config.predictor.leading_args);
    tracing::info!("  PREDICTOR_TIMEOUT: {:?} (retries: {})", config.predictor.timeout, config.predictor.retries);
    tracing::info!("  STORE_PATH: {}", config.store_path.as_deref().unwrap_or("<in-memory>"));
    tracing::info!("  TRAJECTORY_BASE_YEAR: {}", config.trajectory_base_year);

    let state = AppState::new(&config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
