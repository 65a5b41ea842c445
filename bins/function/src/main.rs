//! Tariff rates function runner
//!
//! Reads one function event (`{"httpMethod": ..., "body": ...}`) from stdin
//! and writes the function response to stdout. Logs go to stderr.

use std::io::{self, Read, Write};

use anyhow::Context;
use tracing::debug;

use tariff_api::function::{FunctionEvent, handle_event};
use tariff_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tariff=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read function event from stdin")?;

    let event: FunctionEvent =
        serde_json::from_str(&input).context("Failed to decode function event")?;
    debug!(method = %event.http_method, "Function event received");

    let response = handle_event(&event, &config.pricing, &config.server.endpoint_url());

    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;

    Ok(())
}
