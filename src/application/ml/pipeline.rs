use super::bundle::ModelBundle;
use crate::domain::employee::EmployeeProfile;
use crate::domain::errors::{PipelineError, PredictionFailed};
use crate::domain::ml::{FeatureLayout, FeatureRecord, FeatureVector, encode_record};
use std::sync::Arc;
use tracing::debug;

/// Turns one employee profile into a salary prediction:
/// encode -> arrange in bundle order -> scale -> regress.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    bundle: Arc<ModelBundle>,
}

impl InferencePipeline {
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self { bundle }
    }

    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    /// Encoded feature row in bundle order, before scaling.
    pub fn encode(&self, profile: &EmployeeProfile) -> Result<FeatureVector, PredictionFailed> {
        Ok(encode_profile(&self.bundle, profile)?)
    }

    /// Scaled feature row exactly as the regressor receives it.
    pub fn prepare(&self, profile: &EmployeeProfile) -> Result<FeatureVector, PredictionFailed> {
        let encoded = encode_profile(&self.bundle, profile)?;
        Ok(self.bundle.scaler().transform(encoded)?)
    }

    pub fn predict(&self, profile: &EmployeeProfile) -> Result<f64, PredictionFailed> {
        let scaled = self.prepare(profile)?;
        let salary = regress(&self.bundle, &scaled)?;
        debug!(
            "InferencePipeline: {} -> {:.2} ({})",
            profile.job_title,
            salary,
            self.bundle.model().name()
        );
        Ok(salary)
    }
}

fn encode_profile(
    bundle: &ModelBundle,
    profile: &EmployeeProfile,
) -> Result<FeatureVector, PipelineError> {
    let record = FeatureRecord::from_profile(profile);
    let encoded = encode_record(record, bundle.label_encoders())?;
    let layout = FeatureLayout::resolve(bundle.feature_names())?;
    layout.arrange(&encoded)
}

fn regress(bundle: &ModelBundle, row: &FeatureVector) -> Result<f64, PipelineError> {
    if let Some(expected) = bundle.model().n_features() {
        if row.len() != expected {
            return Err(PipelineError::DimensionMismatch {
                stage: "regressor",
                expected,
                actual: row.len(),
            });
        }
    }

    let salary = bundle
        .model()
        .predict(row.as_slice())
        .map_err(PipelineError::Regressor)?;

    if !salary.is_finite() {
        return Err(PipelineError::Regressor(format!(
            "model returned a non-finite prediction: {}",
            salary
        )));
    }
    Ok(salary)
}
