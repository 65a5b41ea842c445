//! Shared types, errors, and configuration for the tariff rate service.
//!
//! This crate provides common types used across all other crates:
//! - Money type with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, PricingConfig, ServerConfig};
pub use error::AppError;
