// PlantVision Server Binary Entry Point
//
// Purpose: Start the Axum server for the plant search page
// Usage: PERENUAL_API_KEY=... cargo run --bin plantvision

use plantvision::{AppState, ServerConfig, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "plantvision=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PlantVision...");

    // Configuration from environment variables
    let config = ServerConfig::from_env();
    let addr = config.socket_addr();

    tracing::info!("Configuration:");
    tracing::info!("  PERENUAL_BASE_URL: {}", config.gateway.base_url);
    tracing::info!("  PERENUAL_API_KEY: {}", if config.gateway.api_key.is_empty() { "<unset>" } else { "<set>" });
    tracing::info!("  BIND: {}", addr);

    let state = AppState::new(config.gateway)?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
