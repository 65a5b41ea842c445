//! Liveness probe that also echoes the active pricing, so a deploy can be
//! checked against its environment without placing a test order.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Path the rates callback is mounted on.
    pub rates_path: String,
    /// Pricing loaded at startup.
    pub pricing: PricingSummary,
}

/// Pricing knobs as decimal strings.
#[derive(Debug, Serialize)]
pub struct PricingSummary {
    /// Surcharge fraction.
    pub percent: String,
    /// Minimum domestic surcharge ("0.00" = off).
    pub min_fee: String,
    /// Maximum domestic surcharge ("0.00" = off).
    pub max_fee: String,
    /// Domestic base fee.
    pub base_domestic: String,
    /// International base fee.
    pub base_international: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let pricing = &state.pricing;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        rates_path: state.server.rates_path.clone(),
        pricing: PricingSummary {
            percent: pricing.percent.normalize().to_string(),
            min_fee: pricing.min_fee.to_string(),
            max_fee: pricing.max_fee.to_string(),
            base_domestic: pricing.base_domestic.to_string(),
            base_international: pricing.base_international.to_string(),
        },
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
