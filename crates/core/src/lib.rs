//! Core business logic for the tariff rate service.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Request parsing, eligibility rules, and price calculations live here.
//!
//! # Modules
//!
//! - `rate` - Rate request parsing and quote computation

pub mod rate;

pub use rate::{RateError, RateQuote, RateQuoter, RateRequest, RatesResponse};
