//! Property-based tests for rate quoting.
//!
//! - Property 1: Eligibility filter
//! - Property 2: Total price format
//! - Property 3: Fee bounds
//! - Property 4: International flat rate
//! - Property 5: Determinism

use proptest::prelude::*;
use rust_decimal::Decimal;
use tariff_shared::PricingConfig;
use tariff_shared::types::Money;

use super::service::{RateQuoter, quote};
use super::types::{LineItem, RateRequest};

/// Strategy to generate line items with prices up to 10,000.00 and up to 50 units.
fn line_item() -> impl Strategy<Value = LineItem> {
    (0i64..1_000_000, 0i64..50, any::<bool>(), any::<bool>()).prop_map(
        |(price, quantity, requires_shipping, gift_card)| LineItem {
            price: Decimal::from(price),
            quantity: Decimal::from(quantity),
            requires_shipping,
            gift_card,
        },
    )
}

fn request_to(country: impl Strategy<Value = String>) -> impl Strategy<Value = RateRequest> {
    (country, prop::collection::vec(line_item(), 0..12)).prop_map(|(country, items)| {
        RateRequest {
            country: Some(country),
            items,
            ..RateRequest::default()
        }
    })
}

fn rate_request() -> impl Strategy<Value = RateRequest> {
    request_to(prop::sample::select(vec!["US", "CA", "GB", "MX", "us"]).prop_map(str::to_string))
}

fn domestic_request() -> impl Strategy<Value = RateRequest> {
    request_to(Just("US".to_string()))
}

fn international_request() -> impl Strategy<Value = RateRequest> {
    request_to(prop::sample::select(vec!["CA", "GB", "MX", "us"]).prop_map(str::to_string))
}

/// Strategy to generate a money amount between 0.00 and 50.00.
fn fee_bound() -> impl Strategy<Value = Money> {
    (0i64..=5_000).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy to generate enabled bounds (0.01 to 50.00) with min <= max.
fn ordered_bounds() -> impl Strategy<Value = (Money, Money)> {
    (1i64..=5_000, 1i64..=5_000).prop_map(|(a, b)| {
        (
            Money::new(Decimal::new(a.min(b), 2)),
            Money::new(Decimal::new(a.max(b), 2)),
        )
    })
}

fn pricing() -> impl Strategy<Value = PricingConfig> {
    (0i64..=2_500, fee_bound(), fee_bound(), 0i64..=5_000, 0i64..=10_000).prop_map(
        |(basis_points, min_fee, max_fee, domestic, international)| PricingConfig {
            percent: Decimal::new(basis_points, 4),
            min_fee,
            max_fee,
            base_domestic: Money::new(Decimal::new(domestic, 2)),
            base_international: Money::new(Decimal::new(international, 2)),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 1: Adding a gift card or a non-shipping line never changes the quote.
    #[test]
    fn prop_ineligible_items_do_not_affect_quote(
        request in rate_request(),
        pricing in pricing(),
        extra in line_item(),
    ) {
        let mut gift_card = extra.clone();
        gift_card.gift_card = true;

        let mut not_shipped = extra;
        not_shipped.requires_shipping = false;

        let mut with_extra = request.clone();
        with_extra.items.push(gift_card);
        with_extra.items.push(not_shipped);

        prop_assert_eq!(
            quote(&request, &pricing).unwrap(),
            quote(&with_extra, &pricing).unwrap()
        );
    }

    /// Property 1.1: The subtotal equals the sum over eligible lines only.
    #[test]
    fn prop_subtotal_counts_eligible_lines(items in prop::collection::vec(line_item(), 0..12)) {
        let expected: Decimal = items
            .iter()
            .filter(|i| i.requires_shipping && !i.gift_card)
            .map(|i| i.price * i.quantity)
            .sum();

        let subtotal = RateQuoter::eligible_subtotal(&items).unwrap();
        prop_assert_eq!(subtotal, Money::from_minor_units(expected));
    }

    /// Property 2: total_price is always a non-negative integer string.
    #[test]
    fn prop_total_price_is_non_negative_integer(
        request in rate_request(),
        pricing in pricing(),
    ) {
        let quote = quote(&request, &pricing).unwrap();
        prop_assert!(!quote.total_price.is_empty());
        prop_assert!(
            quote.total_price.chars().all(|c| c.is_ascii_digit()),
            "total_price {} is not a plain integer",
            quote.total_price
        );
    }

    /// Property 3: With both bounds set and min <= max, the domestic fee stays within them.
    #[test]
    fn prop_domestic_fee_within_bounds(
        request in domestic_request(),
        pricing in pricing(),
        (min_fee, max_fee) in ordered_bounds(),
    ) {
        let pricing = PricingConfig { min_fee, max_fee, ..pricing };

        let breakdown = RateQuoter::breakdown(&request, &pricing).unwrap();
        prop_assert!(breakdown.fee >= pricing.min_fee);
        prop_assert!(breakdown.fee <= pricing.max_fee);
    }

    /// Property 3.1: A disabled bound leaves that side unconstrained.
    #[test]
    fn prop_unbounded_fee_matches_raw_surcharge(request in domestic_request()) {
        let pricing = PricingConfig::default();

        let breakdown = RateQuoter::breakdown(&request, &pricing).unwrap();
        let raw = RateQuoter::tariff_fee(breakdown.subtotal, pricing.percent).unwrap();
        prop_assert_eq!(breakdown.fee, raw);
    }

    /// Property 4: International quotes have no fee and total the international base.
    #[test]
    fn prop_international_is_flat(
        request in international_request(),
        pricing in pricing(),
    ) {
        let breakdown = RateQuoter::breakdown(&request, &pricing).unwrap();
        prop_assert!(breakdown.fee.is_zero());
        prop_assert_eq!(breakdown.total, pricing.base_international.round_cents());
    }

    /// Property 5: Identical input and configuration give byte-identical output.
    #[test]
    fn prop_quote_is_deterministic(
        request in rate_request(),
        pricing in pricing(),
    ) {
        let first = serde_json::to_vec(&quote(&request, &pricing).unwrap()).unwrap();
        let second = serde_json::to_vec(&quote(&request, &pricing).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
