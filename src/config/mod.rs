//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast if a value is present but malformed.
//! Every variable is optional; defaults reproduce the demo timings.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::inventory::EXPIRY_WINDOW_DAYS;

#[derive(Debug, Clone)]
pub struct Config {
    /// TOML seed inventory. None = built-in catalog.
    pub seed_file: Option<PathBuf>,
    /// Simulated latency of scan and analyze.
    pub ingest_delay: Duration,
    /// Simulated latency of the chef.
    pub suggest_delay: Duration,
    /// Simulated latency of placing a restock order.
    pub order_delay: Duration,
    pub expiry_window_days: i64,
    pub otel_endpoint: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            ingest_delay: Duration::from_millis(2000),
            suggest_delay: Duration::from_millis(1500),
            order_delay: Duration::from_millis(1500),
            expiry_window_days: EXPIRY_WINDOW_DAYS,
            otel_endpoint: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            seed_file: std::env::var("PURCHAIS_SEED_FILE").ok().map(PathBuf::from),
            ingest_delay: millis_var("PURCHAIS_INGEST_DELAY_MS")?.unwrap_or(defaults.ingest_delay),
            suggest_delay: millis_var("PURCHAIS_SUGGEST_DELAY_MS")?
                .unwrap_or(defaults.suggest_delay),
            order_delay: millis_var("PURCHAIS_ORDER_DELAY_MS")?.unwrap_or(defaults.order_delay),
            expiry_window_days: parsed_var("PURCHAIS_EXPIRY_WINDOW_DAYS")?
                .unwrap_or(defaults.expiry_window_days),
            otel_endpoint: std::env::var("OTEL_ENDPOINT").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// No simulated latency at all. Handy for tests and scripting.
    pub fn instant() -> Self {
        Self {
            ingest_delay: Duration::ZERO,
            suggest_delay: Duration::ZERO,
            order_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

fn millis_var(name: &str) -> Result<Option<Duration>> {
    Ok(parsed_var::<u64>(name)?.map(Duration::from_millis))
}

fn parsed_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{name} has an invalid value: {raw:?}"))),
        Err(_) => Ok(None),
    }
}
