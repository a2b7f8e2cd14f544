//! Configuration module for the salary predictor.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Model and Currency.

mod currency_config;
mod model_config;

pub use currency_config::{CurrencyEnvConfig, RateMode};
pub use model_config::ModelEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Source of configuration values, keyed by variable name.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Parses `key` with `FromStr`, falling back to `default` when unset.
pub(crate) fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub model: ModelEnvConfig,
    pub currency: CurrencyEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let model = ModelEnvConfig::from_lookup(lookup);
        let currency =
            CurrencyEnvConfig::from_lookup(lookup).context("Failed to load currency config")?;

        Ok(Self { model, currency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(&|_| None).unwrap();
        assert_eq!(config.model.model_path.to_str(), Some("model.json"));
        assert_eq!(config.model.score_path.to_str(), Some("model_rank.txt"));
        assert_eq!(config.currency.mode, RateMode::Live);
        assert_eq!(config.currency.api_url, "https://open.er-api.com/v6/latest/USD");
        assert_eq!(config.currency.target_currency, "INR");
        assert_eq!(config.currency.refresh_interval_secs, 3600);
        assert_eq!(config.currency.timeout_secs, 5);
        assert_eq!(config.currency.fallback_rate, 83.0);
        assert_eq!(config.currency.fixed_rate, 83.0);
    }

    #[test]
    fn test_overrides() {
        let lookup = lookup_from(&[
            ("MODEL_PATH", "/opt/models/salary.json"),
            ("RATE_MODE", "fixed"),
            ("TARGET_CURRENCY", "eur"),
            ("RATE_REFRESH_SECONDS", "60"),
            ("FALLBACK_RATE", "0.9"),
        ]);
        let config = Config::from_lookup(&lookup).unwrap();

        assert_eq!(config.model.model_path.to_str(), Some("/opt/models/salary.json"));
        assert_eq!(config.currency.mode, RateMode::Fixed);
        assert_eq!(config.currency.target_currency, "EUR");
        assert_eq!(config.currency.refresh_interval_secs, 60);
        // FIXED_RATE follows FALLBACK_RATE unless set explicitly
        assert_eq!(config.currency.fixed_rate, 0.9);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_number = lookup_from(&[("RATE_TIMEOUT_SECONDS", "five")]);
        let err = Config::from_lookup(&bad_number).unwrap_err();
        assert!(format!("{:#}", err).contains("RATE_TIMEOUT_SECONDS"));

        let bad_mode = lookup_from(&[("RATE_MODE", "carrier-pigeon")]);
        assert!(Config::from_lookup(&bad_mode).is_err());

        let bad_url = lookup_from(&[("RATE_API_URL", "not a url")]);
        assert!(Config::from_lookup(&bad_url).is_err());

        let bad_currency = lookup_from(&[("TARGET_CURRENCY", "RUPEE")]);
        assert!(Config::from_lookup(&bad_currency).is_err());
    }

    #[test]
    fn test_zero_durations_are_rejected() {
        let zero_timeout = lookup_from(&[("RATE_TIMEOUT_SECONDS", "0")]);
        let err = Config::from_lookup(&zero_timeout).unwrap_err();
        assert!(format!("{:#}", err).contains("RATE_TIMEOUT_SECONDS must be at least 1 second"));

        let zero_refresh = lookup_from(&[("RATE_REFRESH_SECONDS", "0")]);
        let err = Config::from_lookup(&zero_refresh).unwrap_err();
        assert!(format!("{:#}", err).contains("RATE_REFRESH_SECONDS"));

        let one_second = lookup_from(&[("RATE_TIMEOUT_SECONDS", "1"), ("RATE_REFRESH_SECONDS", "1")]);
        assert!(Config::from_lookup(&one_second).is_ok());
    }
}
