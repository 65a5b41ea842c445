//! Application configuration management.

use std::str::FromStr;

use config::ConfigError;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Money;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Pricing knobs, read from the flat `TARIFF_*`/`BASE_*` variables.
    #[serde(skip)]
    pub pricing: PricingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path the carrier service callback is mounted on.
    #[serde(default = "default_rates_path")]
    pub rates_path: String,
    /// Externally reachable URL of the rates endpoint, used in the usage hint.
    #[serde(default)]
    pub public_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_rates_path() -> String {
    "/shopify/rates".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rates_path: default_rates_path(),
            public_url: None,
        }
    }
}

impl ServerConfig {
    /// URL advertised in the GET usage hint.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        match &self.public_url {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!("http://localhost:{}{}", self.port, self.rates_path),
        }
    }
}

/// Pricing configuration for the tariff surcharge and base fees.
///
/// Amounts are in major currency units. A zero `min_fee` or `max_fee`
/// disables that bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Surcharge as a fraction of the eligible subtotal (0.05 = 5%).
    pub percent: Decimal,
    /// Minimum domestic surcharge.
    pub min_fee: Money,
    /// Maximum domestic surcharge.
    pub max_fee: Money,
    /// Base fee for domestic (US) shipments.
    pub base_domestic: Money,
    /// Base fee for international shipments.
    pub base_international: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            percent: Decimal::new(5, 2),
            min_fee: Money::zero(),
            max_fee: Money::zero(),
            base_domestic: Money::new(Decimal::new(600, 2)),
            base_international: Money::new(Decimal::new(1800, 2)),
        }
    }
}

/// Raw pricing variables as they appear in the environment.
#[derive(Debug, Default, Deserialize)]
struct PricingEnv {
    tariff_percent: Option<String>,
    tariff_min: Option<String>,
    tariff_max: Option<String>,
    base_us: Option<String>,
    base_intl: Option<String>,
}

impl PricingConfig {
    /// Reads `TARIFF_PERCENT`, `TARIFF_MIN`, `TARIFF_MAX`, `BASE_US` and
    /// `BASE_INTL` from the process environment.
    ///
    /// Unset or empty variables take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is not a decimal number or is negative.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: PricingEnv = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: PricingEnv) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            percent: parse_amount("TARIFF_PERCENT", raw.tariff_percent, defaults.percent)?,
            min_fee: Money::new(parse_amount("TARIFF_MIN", raw.tariff_min, defaults.min_fee.amount)?),
            max_fee: Money::new(parse_amount("TARIFF_MAX", raw.tariff_max, defaults.max_fee.amount)?),
            base_domestic: Money::new(parse_amount(
                "BASE_US",
                raw.base_us,
                defaults.base_domestic.amount,
            )?),
            base_international: Money::new(parse_amount(
                "BASE_INTL",
                raw.base_intl,
                defaults.base_international.amount,
            )?),
        })
    }
}

fn parse_amount(name: &str, raw: Option<String>, default: Decimal) -> Result<Decimal, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ConfigError::Message(format!("{name} is not a number: {trimmed:?}")))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(ConfigError::Message(format!(
            "{name} must not be negative, got {trimmed}"
        )));
    }

    Ok(value)
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TARIFF").separator("__"))
            .build()?;

        let mut app: Self = config.try_deserialize()?;
        app.pricing = PricingConfig::from_env()?;
        Ok(app)
    }
}
