use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Currency every prediction is expressed in before conversion.
pub const BASE_CURRENCY: &str = "USD";

/// Rate returned when no rate has ever been fetched successfully.
pub const DEFAULT_FALLBACK_RATE: f64 = 83.0;

/// A successfully fetched USD -> target multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub value: f64,
    pub fetched_at: DateTime<Utc>,
}

impl RateEntry {
    /// Fresh while younger than `max_age`; an entry exactly `max_age` old is stale.
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age: chrono::Duration) -> bool {
        now - self.fetched_at < max_age
    }
}

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch the current USD -> `currency` multiplier
    async fn fetch_rate(&self, currency: &str) -> anyhow::Result<f64>;

    fn name(&self) -> &str;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
