//! Rate quoting service.
//!
//! Pricing rules:
//! - Subtotal covers shippable, non-gift-card lines only, in whole cents
//! - Domestic surcharge is `subtotal * percent`, rounded to cents, then
//!   raised to `min_fee` and lowered to `max_fee` when those are set
//! - International quotes carry no surcharge
//! - Totals round half away from zero

use rust_decimal::Decimal;
use tariff_shared::PricingConfig;
use tariff_shared::types::Money;
use tariff_shared::types::money::round_half_up;

use super::error::RateError;
use super::request::parse_rate_request;
use super::types::{LineItem, QuoteBreakdown, RateQuote, RateRequest, RatesResponse, ServiceCode};

/// Rate quoting operations. Stateless; all inputs are passed explicitly.
pub struct RateQuoter;

impl RateQuoter {
    /// Sums `price * quantity` over eligible lines and converts to major units.
    ///
    /// A negative sum (negative prices or quantities) is floored at zero.
    pub fn eligible_subtotal(items: &[LineItem]) -> Result<Money, RateError> {
        let minor = items
            .iter()
            .filter(|item| item.is_eligible())
            .try_fold(Decimal::ZERO, |sum, item| {
                item.price
                    .checked_mul(item.quantity)
                    .and_then(|line| sum.checked_add(line))
            })
            .ok_or(RateError::Overflow("subtotal"))?;

        Ok(Money::from_minor_units(minor.max(Decimal::ZERO)))
    }

    /// Raw domestic surcharge before clamping, rounded to cents.
    pub fn tariff_fee(subtotal: Money, percent: Decimal) -> Result<Money, RateError> {
        subtotal
            .checked_scale(percent)
            .map(Money::round_cents)
            .ok_or(RateError::Overflow("fee"))
    }

    /// Applies the configured minimum, then maximum. A zero bound is disabled.
    #[must_use]
    pub fn clamp_fee(mut fee: Money, pricing: &PricingConfig) -> Money {
        if pricing.min_fee.is_positive() && fee < pricing.min_fee {
            fee = pricing.min_fee;
        }
        if pricing.max_fee.is_positive() && fee > pricing.max_fee {
            fee = pricing.max_fee;
        }
        fee
    }

    /// Computes all intermediate amounts for a request.
    pub fn breakdown(
        request: &RateRequest,
        pricing: &PricingConfig,
    ) -> Result<QuoteBreakdown, RateError> {
        let subtotal = Self::eligible_subtotal(&request.items)?;

        let (base, fee) = if request.is_domestic() {
            let fee = Self::tariff_fee(subtotal, pricing.percent)?;
            (pricing.base_domestic, Self::clamp_fee(fee, pricing))
        } else {
            (pricing.base_international, Money::zero())
        };

        let total = base
            .checked_add(fee)
            .map(Money::round_cents)
            .ok_or(RateError::Overflow("total"))?;

        Ok(QuoteBreakdown {
            subtotal,
            fee,
            base,
            total,
        })
    }

    /// Configured percent as a whole number for display (0.05 -> "5").
    pub fn percent_label(percent: Decimal) -> Result<String, RateError> {
        percent
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|p| round_half_up(p, 0).normalize().to_string())
            .ok_or(RateError::Overflow("percent"))
    }

    /// Produces the single quote returned to the platform.
    pub fn quote(request: &RateRequest, pricing: &PricingConfig) -> Result<RateQuote, RateError> {
        let breakdown = Self::breakdown(request, pricing)?;
        let total_price = breakdown
            .total
            .checked_minor_units()
            .ok_or(RateError::Overflow("total_price"))?
            .to_string();

        let quote = if request.is_domestic() {
            let percent = Self::percent_label(pricing.percent)?;
            RateQuote {
                service_name: format!("Standard (Shipping + Tariff {percent}%)"),
                service_code: ServiceCode::UsTariff,
                description: format!(
                    "Includes tariff surcharge based on {percent}% of merchandise subtotal"
                ),
                currency: request.currency.clone(),
                total_price,
            }
        } else {
            RateQuote {
                service_name: "Standard International".to_string(),
                service_code: ServiceCode::International,
                description: "Standard international shipping".to_string(),
                currency: request.currency.clone(),
                total_price,
            }
        };

        Ok(quote)
    }
}

/// Quotes a parsed request.
pub fn quote(request: &RateRequest, pricing: &PricingConfig) -> Result<RateQuote, RateError> {
    RateQuoter::quote(request, pricing)
}

/// Parses a raw body and quotes it, producing the full response document.
pub fn quote_body(body: &[u8], pricing: &PricingConfig) -> Result<RatesResponse, RateError> {
    let request = parse_rate_request(body)?;
    quote(&request, pricing).map(RatesResponse::from)
}
