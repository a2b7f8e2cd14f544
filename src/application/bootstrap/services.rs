use crate::application::currency::{CurrencyRateCache, RateCacheSettings};
use crate::application::ml::{InferencePipeline, ModelBundle, load_score};
use crate::application::salary_service::SalaryService;
use crate::config::{Config, CurrencyEnvConfig, RateMode};
use crate::domain::currency::{Clock, RateSource, SystemClock};
use crate::domain::errors::BundleError;
use crate::infrastructure::exchange_rate::{ErApiRateSource, FixedRateSource};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct ServicesBootstrap;

impl ServicesBootstrap {
    /// Builds the salary service. A missing or corrupt model bundle is fatal.
    pub fn init(config: &Config) -> Result<SalaryService, BundleError> {
        Self::init_with_clock(config, Arc::new(SystemClock))
    }

    pub fn init_with_clock(
        config: &Config,
        clock: Arc<dyn Clock>,
    ) -> Result<SalaryService, BundleError> {
        // 1. Model bundle (+ informational score)
        let score = load_score(&config.model.score_path);
        let bundle = ModelBundle::load(&config.model.model_path)?.with_score(score);
        let pipeline = InferencePipeline::new(Arc::new(bundle));

        // 2. Exchange rates
        let source = Self::rate_source(&config.currency);
        info!(
            "Exchange rates: source={}, currency={}, refresh={}s",
            source.name(),
            config.currency.target_currency,
            config.currency.refresh_interval_secs
        );
        let cache = CurrencyRateCache::new(source, clock, Self::cache_settings(&config.currency));

        Ok(SalaryService::new(pipeline, Arc::new(cache)))
    }

    fn rate_source(config: &CurrencyEnvConfig) -> Arc<dyn RateSource> {
        match config.mode {
            RateMode::Live => Arc::new(ErApiRateSource::new(
                config.api_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )),
            RateMode::Fixed => Arc::new(FixedRateSource::new(config.fixed_rate)),
        }
    }

    fn cache_settings(config: &CurrencyEnvConfig) -> RateCacheSettings {
        RateCacheSettings {
            target_currency: config.target_currency.clone(),
            refresh_interval: Duration::from_secs(config.refresh_interval_secs),
            fetch_timeout: Duration::from_secs(config.timeout_secs),
            fallback_rate: config.fallback_rate,
        }
    }
}
