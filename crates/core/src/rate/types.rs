//! Rate request and quote types.

use rust_decimal::Decimal;
use serde::Serialize;
use tariff_shared::types::Money;

/// Destination country that receives the tariff surcharge.
pub const DOMESTIC_COUNTRY: &str = "US";

/// Currency echoed back when the request does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A cart line as sent by the platform.
///
/// `price` is in minor units (cents). Both numeric fields have already been
/// coerced leniently; missing values are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Unit price in minor units.
    pub price: Decimal,
    /// Number of units.
    pub quantity: Decimal,
    /// Whether the item is physically shipped.
    pub requires_shipping: bool,
    /// Whether the item is a gift card.
    pub gift_card: bool,
}

impl LineItem {
    /// Only shippable merchandise counts toward the surcharge.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.requires_shipping && !self.gift_card
    }
}

#[cfg(test)]
impl LineItem {
    /// Shippable, non-gift-card line.
    pub(crate) fn shippable(price: i64, quantity: i64) -> Self {
        Self {
            price: Decimal::from(price),
            quantity: Decimal::from(quantity),
            requires_shipping: true,
            gift_card: false,
        }
    }
}

/// A parsed rate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    /// Destination country code, if one was sent.
    pub country: Option<String>,
    /// Currency code echoed in the quote.
    pub currency: String,
    /// Cart lines in request order.
    pub items: Vec<LineItem>,
}

impl Default for RateRequest {
    fn default() -> Self {
        Self {
            country: None,
            currency: DEFAULT_CURRENCY.to_string(),
            items: Vec::new(),
        }
    }
}

impl RateRequest {
    /// Exact, case-sensitive match on the domestic country code.
    #[must_use]
    pub fn is_domestic(&self) -> bool {
        self.country.as_deref() == Some(DOMESTIC_COUNTRY)
    }
}

/// Service code reported to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceCode {
    /// Domestic shipping with tariff surcharge.
    #[serde(rename = "US_TARIFF")]
    UsTariff,
    /// International shipping.
    #[serde(rename = "INTL")]
    International,
}

impl ServiceCode {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsTariff => "US_TARIFF",
            Self::International => "INTL",
        }
    }
}

impl std::fmt::Display for ServiceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One quoted rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateQuote {
    /// Name shown to the customer at checkout.
    pub service_name: String,
    /// Service code.
    pub service_code: ServiceCode,
    /// Longer description shown to the customer.
    pub description: String,
    /// Currency code from the request.
    pub currency: String,
    /// Total price in minor units, as an integer string.
    pub total_price: String,
}

/// Response body expected by the carrier service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatesResponse {
    /// Quoted rates; this service always returns exactly one.
    pub rates: Vec<RateQuote>,
}

impl From<RateQuote> for RatesResponse {
    fn from(quote: RateQuote) -> Self {
        Self { rates: vec![quote] }
    }
}

/// Intermediate amounts of a quote, in major units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteBreakdown {
    /// Eligible merchandise subtotal.
    pub subtotal: Money,
    /// Tariff surcharge after clamping; zero for international.
    pub fee: Money,
    /// Base shipping fee.
    pub base: Money,
    /// Base plus fee, rounded to cents.
    pub total: Money,
}
