//! Usage hint returned for browser sanity checks (GET on the rates endpoint).

use serde::Serialize;

/// Example request body used in the usage hint.
pub const EXAMPLE_BODY: &str = r#"{"rate":{"destination":{"country":"US"},"currency":"USD","items":[{"requires_shipping":true,"gift_card":false,"price":1200,"quantity":2}]}}"#;

/// Static usage hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageHint {
    /// Always true; the endpoint is up.
    pub ok: bool,
    /// Who is expected to call the endpoint.
    pub note: &'static str,
    /// Ready-to-run example invocation.
    pub example_curl: String,
}

impl UsageHint {
    /// Builds the hint for the given public endpoint URL.
    #[must_use]
    pub fn for_endpoint(url: &str) -> Self {
        Self {
            ok: true,
            note: "This endpoint expects POST from Shopify CCS.",
            example_curl: format!(
                "curl -X POST {url} -H 'Content-Type: application/json' -d '{EXAMPLE_BODY}'"
            ),
        }
    }
}
