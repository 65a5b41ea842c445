//! Tariff rates HTTP server
//!
//! Main entry point for the long-running carrier service callback.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tariff_api::{AppState, create_router};
use tariff_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tariff=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    info!(
        percent = %config.pricing.percent,
        min_fee = %config.pricing.min_fee,
        max_fee = %config.pricing.max_fee,
        base_domestic = %config.pricing.base_domestic,
        base_international = %config.pricing.base_international,
        "Pricing configured"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let rates_path = config.server.rates_path.clone();

    let state = AppState::new(config.pricing, config.server);
    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, %rates_path, "Tariff rates listening");

    axum::serve(listener, app).await?;

    Ok(())
}
