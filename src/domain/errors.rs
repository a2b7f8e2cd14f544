use thiserror::Error;

/// Errors raised by a single stage of the inference pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error("Unknown category for {column}: '{label}' was not seen during training")]
    UnknownCategory { column: String, label: String },

    #[error("Feature mismatch: model expects column '{column}' which the input does not provide")]
    FeatureMismatch { column: String },

    #[error("Column '{column}' is not numeric after encoding")]
    NonNumericFeature { column: String },

    #[error("Dimension mismatch in {stage}: expected {expected} values, got {actual}")]
    DimensionMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Regressor error: {0}")]
    Regressor(String),

    #[error("Prediction task did not complete: {0}")]
    Aborted(String),
}

/// The single failure surfaced to callers of the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Prediction failed: {cause}")]
pub struct PredictionFailed {
    #[source]
    cause: PipelineError,
}

impl PredictionFailed {
    pub fn cause(&self) -> &PipelineError {
        &self.cause
    }
}

impl From<PipelineError> for PredictionFailed {
    fn from(cause: PipelineError) -> Self {
        Self { cause }
    }
}

/// Errors related to loading the serialized model bundle
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Please retrain the model first: cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Please retrain the model first: {path} is not a valid model bundle: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Please retrain the model first: {reason}")]
    Invalid { reason: String },
}

/// Errors raised when form input falls outside its domain
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Age {age} is outside the supported range {min}-{max}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("Years of experience {value} is outside the supported range {min:.1}-{max:.1}")]
    ExperienceOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Years of experience {value} must be a multiple of {step}")]
    ExperienceStep { value: f64, step: f64 },

    #[error("Unknown {field}: '{value}'")]
    UnknownOption { field: &'static str, value: String },
}
