//! HTTP and serverless adapters for the carrier service rates callback.
//!
//! This crate provides:
//! - The axum router for the long-running server
//! - The function-event adapter for serverless hosting
//! - Error-to-response mapping shared by both

pub mod error;
pub mod function;
pub mod routes;
pub mod usage;

use axum::Router;
use std::sync::Arc;
use tariff_shared::{PricingConfig, ServerConfig};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Pricing knobs, loaded once at startup.
    pub pricing: Arc<PricingConfig>,
    /// Server settings (rates path, advertised URL).
    pub server: Arc<ServerConfig>,
}

impl AppState {
    /// Creates state from loaded configuration.
    #[must_use]
    pub fn new(pricing: PricingConfig, server: ServerConfig) -> Self {
        Self {
            pricing: Arc::new(pricing),
            server: Arc::new(server),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes(&state.server.rates_path))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
