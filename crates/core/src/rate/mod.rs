//! Shipping rate quoting for the carrier service callback.

pub mod error;
pub mod request;
pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use error::RateError;
pub use request::{parse_rate_request, rate_request_from_value};
pub use service::{RateQuoter, quote, quote_body};
pub use types::{
    DOMESTIC_COUNTRY, DEFAULT_CURRENCY, LineItem, QuoteBreakdown, RateQuote, RateRequest,
    RatesResponse, ServiceCode,
};
