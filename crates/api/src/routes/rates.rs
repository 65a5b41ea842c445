//! Carrier service rates callback.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::Method,
    routing::post,
};
use tariff_core::{RatesResponse, rate::quote_body};
use tariff_shared::AppError;
use tracing::info;

use crate::{AppState, error::ApiError, usage::UsageHint};

/// Creates the rates route on the configured path.
pub fn routes(rates_path: &str) -> Router<AppState> {
    Router::new().route(
        rates_path,
        post(quote_rates)
            .get(usage_hint)
            .fallback(method_not_allowed),
    )
}

/// POST - Quote shipping for the cart in the request body.
///
/// The body is read raw so that malformed JSON, and a body the extractor
/// refuses (e.g. over the size limit), produce the fallback response.
async fn quote_rates(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RatesResponse>, ApiError> {
    let body = body.map_err(|e| AppError::RateUnavailable(e.body_text()))?;
    let response = quote_body(&body, &state.pricing)?;

    if let Some(quote) = response.rates.first() {
        info!(
            service_code = %quote.service_code,
            currency = %quote.currency,
            total_price = %quote.total_price,
            "Rate quoted"
        );
    }

    Ok(Json(response))
}

/// GET - Usage hint for browser sanity checks.
async fn usage_hint(State(state): State<AppState>) -> Json<UsageHint> {
    Json(UsageHint::for_endpoint(&state.server.endpoint_url()))
}

async fn method_not_allowed(method: Method) -> ApiError {
    AppError::MethodNotAllowed(method.to_string()).into()
}
