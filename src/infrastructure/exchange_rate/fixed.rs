use crate::domain::currency::RateSource;
use async_trait::async_trait;

/// Offline source that always answers with a configured rate.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateSource {
    rate: f64,
}

impl FixedRateSource {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn fetch_rate(&self, _currency: &str) -> anyhow::Result<f64> {
        Ok(self.rate)
    }

    fn name(&self) -> &str {
        "Fixed"
    }
}
