//! Deterministic stand-ins for the model and the exchange-rate service.

use crate::application::ml::SalaryRegressor;
use crate::domain::currency::{Clock, RateSource};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Returns the same salary for every input, or always fails.
#[derive(Debug, Clone)]
pub struct StaticRegressor {
    outcome: Result<f64, String>,
}

impl StaticRegressor {
    pub fn new(salary: f64) -> Self {
        Self {
            outcome: Ok(salary),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

impl SalaryRegressor for StaticRegressor {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "Static Regressor"
    }
}

/// Panics on every prediction, like a model handed a row it cannot process.
#[derive(Debug, Clone, Copy)]
pub struct PanickingRegressor;

impl SalaryRegressor for PanickingRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        panic!("model cannot handle a row of {} features", features.len());
    }

    fn name(&self) -> &str {
        "Panicking Regressor"
    }
}

/// Rows a [`RecordingRegressor`] has been asked to predict on.
#[derive(Debug, Clone, Default)]
pub struct RecordedRows {
    rows: Arc<Mutex<Vec<Vec<f64>>>>,
}

impl RecordedRows {
    pub fn rows(&self) -> Vec<Vec<f64>> {
        lock(&self.rows).clone()
    }

    pub fn count(&self) -> usize {
        lock(&self.rows).len()
    }
}

/// Like [`StaticRegressor`] but keeps every row it receives.
#[derive(Debug, Clone)]
pub struct RecordingRegressor {
    salary: f64,
    seen: RecordedRows,
}

impl RecordingRegressor {
    pub fn new(salary: f64) -> Self {
        Self {
            salary,
            seen: RecordedRows::default(),
        }
    }

    pub fn handle(&self) -> RecordedRows {
        self.seen.clone()
    }
}

impl SalaryRegressor for RecordingRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        lock(&self.seen.rows).push(features.to_vec());
        Ok(self.salary)
    }

    fn name(&self) -> &str {
        "Recording Regressor"
    }
}

#[derive(Debug, Clone)]
enum ScriptedResponse {
    Rate(f64),
    Failure(String),
    Hang,
}

/// Rate source that replays queued responses in order and counts calls.
/// An exhausted script answers with an error.
#[derive(Debug, Default)]
pub struct ScriptedRateSource {
    script: Mutex<VecDeque<ScriptedResponse>>,
    calls: AtomicUsize,
}

impl ScriptedRateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rate(&self, rate: f64) {
        lock(&self.script).push_back(ScriptedResponse::Rate(rate));
    }

    pub fn push_failure(&self, reason: impl Into<String>) {
        lock(&self.script).push_back(ScriptedResponse::Failure(reason.into()));
    }

    /// Queues a response that never completes, as a stalled connection would.
    pub fn push_hang(&self) {
        lock(&self.script).push_back(ScriptedResponse::Hang);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RateSource for ScriptedRateSource {
    async fn fetch_rate(&self, _currency: &str) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = lock(&self.script).pop_front();

        match next {
            Some(ScriptedResponse::Rate(rate)) => Ok(rate),
            Some(ScriptedResponse::Failure(reason)) => anyhow::bail!(reason),
            Some(ScriptedResponse::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                anyhow::bail!("scripted hang elapsed")
            }
            None => anyhow::bail!("no scripted response left"),
        }
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = lock(&self.now);
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc.timestamp_opt(1_767_225_600, 0).single().unwrap_or_default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *lock(&self.now)
    }
}
