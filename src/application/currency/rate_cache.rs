use crate::domain::currency::{Clock, DEFAULT_FALLBACK_RATE, RateEntry, RateSource};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone)]
pub struct RateCacheSettings {
    pub target_currency: String,
    pub refresh_interval: Duration,
    pub fetch_timeout: Duration,
    pub fallback_rate: f64,
}

impl Default for RateCacheSettings {
    fn default() -> Self {
        Self {
            target_currency: "INR".to_string(),
            refresh_interval: Duration::from_secs(3600),
            fetch_timeout: Duration::from_secs(5),
            fallback_rate: DEFAULT_FALLBACK_RATE,
        }
    }
}

/// Process-wide cache for a single USD -> target exchange rate.
///
/// * No entry: fetch.
/// * Entry younger than `refresh_interval`: served without fetching.
/// * Older entry: fetch again.
///
/// A failed fetch never reaches the caller. The previous value is served with
/// its original timestamp so the next call retries; with no previous value the
/// fallback rate is returned and nothing is cached.
pub struct CurrencyRateCache {
    source: Arc<dyn RateSource>,
    clock: Arc<dyn Clock>,
    settings: RateCacheSettings,
    entry: Mutex<Option<RateEntry>>,
}

impl std::fmt::Debug for CurrencyRateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrencyRateCache")
            .field("source", &self.source.name())
            .field("settings", &self.settings)
            .field("entry", &"<Mutex>")
            .finish()
    }
}

impl CurrencyRateCache {
    pub fn new(
        source: Arc<dyn RateSource>,
        clock: Arc<dyn Clock>,
        settings: RateCacheSettings,
    ) -> Self {
        Self {
            source,
            clock,
            settings,
            entry: Mutex::new(None),
        }
    }

    pub fn target_currency(&self) -> &str {
        &self.settings.target_currency
    }

    /// Snapshot of the cached entry, if any fetch has succeeded yet
    pub fn cached(&self) -> Option<RateEntry> {
        *self.lock()
    }

    pub async fn get_rate(&self) -> f64 {
        let previous = self.cached();
        let max_age = chrono::Duration::from_std(self.settings.refresh_interval)
            .unwrap_or(chrono::Duration::MAX);

        if let Some(entry) = previous {
            if entry.is_fresh(self.clock.now(), max_age) {
                debug!(
                    "CurrencyRateCache: serving cached {} rate {}",
                    self.settings.target_currency, entry.value
                );
                return entry.value;
            }
        }

        // The lock is not held across the fetch; concurrent refreshes race and
        // the last writer wins.
        match self.fetch().await {
            Ok(value) => {
                let entry = RateEntry {
                    value,
                    fetched_at: self.clock.now(),
                };
                *self.lock() = Some(entry);
                info!(
                    "CurrencyRateCache: refreshed USD/{} = {} from {}",
                    self.settings.target_currency,
                    value,
                    self.source.name()
                );
                value
            }
            Err(e) => match previous {
                Some(entry) => {
                    warn!(
                        "CurrencyRateCache: refresh failed ({:#}), serving stale rate {}",
                        e, entry.value
                    );
                    entry.value
                }
                None => {
                    warn!(
                        "CurrencyRateCache: fetch failed ({:#}), using fallback rate {}",
                        e, self.settings.fallback_rate
                    );
                    self.settings.fallback_rate
                }
            },
        }
    }

    async fn fetch(&self) -> anyhow::Result<f64> {
        let timeout = self.settings.fetch_timeout;
        let value = tokio::time::timeout(
            timeout,
            self.source.fetch_rate(&self.settings.target_currency),
        )
        .await
        .map_err(|_| anyhow::anyhow!("rate fetch timed out after {:?}", timeout))??;

        if !value.is_finite() || value <= 0.0 {
            anyhow::bail!("rate source returned an invalid rate: {}", value);
        }
        Ok(value)
    }

    fn lock(&self) -> MutexGuard<'_, Option<RateEntry>> {
        match self.entry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("CurrencyRateCache: Lock poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }
}
