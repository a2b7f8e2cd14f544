pub mod bundle;
pub mod pipeline;
pub mod predictor;
pub mod smartcore_predictor;

pub use bundle::{BundleArtifact, ModelBundle, load_score};
pub use pipeline::InferencePipeline;
pub use predictor::SalaryRegressor;
pub use smartcore_predictor::SmartCoreRegressor;
