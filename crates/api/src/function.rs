//! Serverless function adapter.
//!
//! Hosts that invoke a function per request hand over an event carrying the
//! HTTP method and the raw body, and expect a status/headers/body triple
//! back. This adapter applies the same method rules and fallback behaviour
//! as the HTTP route.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tariff_core::rate::quote_body;
use tariff_shared::{AppError, PricingConfig};
use tracing::{info, warn};

use crate::usage::UsageHint;

/// Incoming function event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    /// HTTP method of the original request; empty when the host omits it.
    #[serde(default)]
    pub http_method: String,
    /// Raw request body, if any.
    #[serde(default)]
    pub body: Option<String>,
}

/// Function result handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Response body.
    pub body: String,
}

impl FunctionResponse {
    fn json(body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code: 200,
            headers,
            body,
        }
    }

    fn from_error(err: &AppError) -> Self {
        warn!(error = %err, code = err.error_code(), "Function request rejected");
        Self {
            status_code: err.status_code(),
            headers: BTreeMap::new(),
            body: err.public_body().to_string(),
        }
    }
}

/// Handles one function invocation.
pub fn handle_event(
    event: &FunctionEvent,
    pricing: &PricingConfig,
    endpoint_url: &str,
) -> FunctionResponse {
    let result = match event.http_method.as_str() {
        "GET" => serialize(&UsageHint::for_endpoint(endpoint_url)),
        "POST" => quote(event.body.as_deref().unwrap_or_default(), pricing),
        other => Err(AppError::MethodNotAllowed(other.to_string())),
    };

    match result {
        Ok(body) => FunctionResponse::json(body),
        Err(err) => FunctionResponse::from_error(&err),
    }
}

fn quote(body: &str, pricing: &PricingConfig) -> Result<String, AppError> {
    let response = quote_body(body.as_bytes(), pricing)?;

    if let Some(quote) = response.rates.first() {
        info!(
            service_code = %quote.service_code,
            currency = %quote.currency,
            total_price = %quote.total_price,
            "Rate quoted"
        );
    }

    serialize(&response)
}

fn serialize<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string(value).map_err(|e| AppError::RateUnavailable(e.to_string()))
}
