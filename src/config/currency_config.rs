//! Currency conversion configuration parsing from environment variables.

use super::{Lookup, parse_or};
use crate::domain::currency::DEFAULT_FALLBACK_RATE;
use crate::infrastructure::exchange_rate::er_api::DEFAULT_ER_API_URL;
use anyhow::{Context, Result};
use std::str::FromStr;

/// Where exchange rates come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateMode {
    /// HTTP lookup against `RATE_API_URL`
    #[default]
    Live,
    /// Offline: always `FIXED_RATE`
    Fixed,
}

impl FromStr for RateMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(RateMode::Live),
            "fixed" => Ok(RateMode::Fixed),
            _ => anyhow::bail!("Invalid RATE_MODE: {}. Must be 'live' or 'fixed'", s),
        }
    }
}

/// Currency environment configuration
#[derive(Debug, Clone)]
pub struct CurrencyEnvConfig {
    pub mode: RateMode,
    pub api_url: String,
    pub target_currency: String,
    pub refresh_interval_secs: u64,
    pub timeout_secs: u64,
    pub fallback_rate: f64,
    pub fixed_rate: f64,
}

impl Default for CurrencyEnvConfig {
    fn default() -> Self {
        Self {
            mode: RateMode::Live,
            api_url: DEFAULT_ER_API_URL.to_string(),
            target_currency: "INR".to_string(),
            refresh_interval_secs: 3600,
            timeout_secs: 5,
            fallback_rate: DEFAULT_FALLBACK_RATE,
            fixed_rate: DEFAULT_FALLBACK_RATE,
        }
    }
}

impl CurrencyEnvConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self> {
        let defaults = Self::default();

        let mode = match lookup("RATE_MODE") {
            Some(raw) => RateMode::from_str(raw.trim())?,
            None => defaults.mode,
        };

        let api_url = lookup("RATE_API_URL").unwrap_or(defaults.api_url);
        url::Url::parse(&api_url).with_context(|| format!("Invalid RATE_API_URL: {}", api_url))?;

        let target_currency = lookup("TARGET_CURRENCY")
            .map(|code| code.trim().to_uppercase())
            .unwrap_or(defaults.target_currency);
        if target_currency.len() != 3 || !target_currency.chars().all(|c| c.is_ascii_alphabetic()) {
            anyhow::bail!(
                "Invalid TARGET_CURRENCY: {}. Must be a 3-letter ISO code",
                target_currency
            );
        }

        let refresh_interval_secs =
            parse_or(lookup, "RATE_REFRESH_SECONDS", defaults.refresh_interval_secs)?;
        let timeout_secs = parse_or(lookup, "RATE_TIMEOUT_SECONDS", defaults.timeout_secs)?;
        for (key, secs) in [
            ("RATE_REFRESH_SECONDS", refresh_interval_secs),
            ("RATE_TIMEOUT_SECONDS", timeout_secs),
        ] {
            if secs == 0 {
                anyhow::bail!("{} must be at least 1 second", key);
            }
        }

        let fallback_rate = parse_or(lookup, "FALLBACK_RATE", defaults.fallback_rate)?;
        let fixed_rate = parse_or(lookup, "FIXED_RATE", fallback_rate)?;
        for (key, rate) in [("FALLBACK_RATE", fallback_rate), ("FIXED_RATE", fixed_rate)] {
            if !rate.is_finite() || rate <= 0.0 {
                anyhow::bail!("{} must be a positive number, got {}", key, rate);
            }
        }

        Ok(Self {
            mode,
            api_url,
            target_currency,
            refresh_interval_secs,
            timeout_secs,
            fallback_rate,
            fixed_rate,
        })
    }
}
