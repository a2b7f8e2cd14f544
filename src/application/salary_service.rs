use crate::application::currency::CurrencyRateCache;
use crate::application::ml::InferencePipeline;
use crate::domain::currency::BASE_CURRENCY;
use crate::domain::employee::EmployeeProfile;
use crate::domain::errors::PredictionFailed;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Result of one submitted profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryEstimate {
    pub id: Uuid,
    pub profile: EmployeeProfile,
    pub base_currency: String,
    pub base_salary: f64,
    pub currency: String,
    pub rate: f64,
    pub converted_salary: f64,
}

/// Predicts a salary and converts it with the cached exchange rate.
#[derive(Debug, Clone)]
pub struct SalaryService {
    pipeline: InferencePipeline,
    rates: Arc<CurrencyRateCache>,
}

impl SalaryService {
    pub fn new(pipeline: InferencePipeline, rates: Arc<CurrencyRateCache>) -> Self {
        Self { pipeline, rates }
    }

    pub fn feature_names(&self) -> &[String] {
        self.pipeline.bundle().feature_names()
    }

    pub fn model_score(&self) -> Option<f64> {
        self.pipeline.bundle().score()
    }

    /// The rate is only looked up once the prediction succeeded.
    pub async fn estimate(
        &self,
        profile: &EmployeeProfile,
    ) -> Result<SalaryEstimate, PredictionFailed> {
        let id = Uuid::new_v4();

        let base_salary = self.pipeline.predict(profile).inspect_err(|e| {
            warn!("Estimate {}: {}", id, e);
        })?;

        let rate = self.rates.get_rate().await;
        let estimate = SalaryEstimate {
            id,
            profile: profile.clone(),
            base_currency: BASE_CURRENCY.to_string(),
            base_salary,
            currency: self.rates.target_currency().to_string(),
            rate,
            converted_salary: base_salary * rate,
        };

        info!(
            "Estimate {}: {} with {:.1} years -> {:.2} {} ({:.2} {})",
            id,
            profile.job_title,
            profile.experience,
            estimate.base_salary,
            estimate.base_currency,
            estimate.converted_salary,
            estimate.currency
        );
        Ok(estimate)
    }
}
