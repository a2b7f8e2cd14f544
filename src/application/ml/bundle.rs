use super::predictor::SalaryRegressor;
use super::smartcore_predictor::SmartCoreRegressor;
use crate::domain::errors::BundleError;
use crate::domain::ml::{EncoderMap, FeatureLayout, FeatureScaler};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{info, warn};

/// On-disk form of a model bundle (JSON).
#[derive(Serialize, Deserialize)]
pub struct BundleArtifact {
    pub model: SmartCoreRegressor,
    pub label_encoders: EncoderMap,
    pub scaler: FeatureScaler,
    pub feature_names: Vec<String>,
}

impl BundleArtifact {
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Trained regressor plus the preprocessing it was trained with.
/// Immutable once built; shared behind an `Arc` for the process lifetime.
pub struct ModelBundle {
    model: Box<dyn SalaryRegressor>,
    label_encoders: EncoderMap,
    scaler: FeatureScaler,
    feature_names: Vec<String>,
    score: Option<f64>,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("model", &self.model.name())
            .field("label_encoders", &self.label_encoders)
            .field("scaler", &self.scaler)
            .field("feature_names", &self.feature_names)
            .field("score", &self.score)
            .finish()
    }
}

impl ModelBundle {
    pub fn new(
        model: impl SalaryRegressor + 'static,
        label_encoders: EncoderMap,
        scaler: FeatureScaler,
        feature_names: Vec<String>,
    ) -> Result<Self, BundleError> {
        let bundle = Self {
            model: Box::new(model),
            label_encoders,
            scaler,
            feature_names,
            score: None,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn from_artifact(artifact: BundleArtifact) -> Result<Self, BundleError> {
        Self::new(
            artifact.model,
            artifact.label_encoders,
            artifact.scaler,
            artifact.feature_names,
        )
    }

    /// Loads and validates a JSON bundle artifact.
    pub fn load(path: &Path) -> Result<Self, BundleError> {
        let file = File::open(path).map_err(|source| BundleError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let artifact: BundleArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| BundleError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        let bundle = Self::from_artifact(artifact)?;
        info!(
            "Loaded model bundle from {:?}: model={}, features={:?}",
            path,
            bundle.model.name(),
            bundle.feature_names
        );
        Ok(bundle)
    }

    pub fn with_score(mut self, score: Option<f64>) -> Self {
        self.score = score;
        self
    }

    pub fn model(&self) -> &dyn SalaryRegressor {
        self.model.as_ref()
    }

    pub fn label_encoders(&self) -> &EncoderMap {
        &self.label_encoders
    }

    pub fn scaler(&self) -> &FeatureScaler {
        &self.scaler
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    fn validate(&self) -> Result<(), BundleError> {
        if self.feature_names.is_empty() {
            return Err(BundleError::Invalid {
                reason: "feature_names is empty".to_string(),
            });
        }

        for (column, encoder) in &self.label_encoders {
            encoder.validate().map_err(|reason| BundleError::Invalid {
                reason: format!("encoder for '{}': {}", column, reason),
            })?;
        }

        self.scaler
            .validate()
            .map_err(|reason| BundleError::Invalid { reason })?;

        if let Some(n) = self.scaler.n_features() {
            if n != self.feature_names.len() {
                return Err(BundleError::Invalid {
                    reason: format!(
                        "scaler was fitted on {} features but feature_names lists {}",
                        n,
                        self.feature_names.len()
                    ),
                });
            }
        }

        if let Some(n) = self.model.n_features() {
            if n != self.feature_names.len() {
                return Err(BundleError::Invalid {
                    reason: format!(
                        "{} was fitted on {} features but feature_names lists {}",
                        self.model.name(),
                        n,
                        self.feature_names.len()
                    ),
                });
            }
        }

        // Unknown names are reported per prediction as a feature mismatch.
        if let Err(e) = FeatureLayout::resolve(self.feature_names.as_slice()) {
            warn!("Model bundle expects a column the form does not collect: {}", e);
        }

        Ok(())
    }
}

/// Reads the model quality score written next to the bundle at training time.
/// The score is informational, so a missing or malformed file yields `None`.
pub fn load_score(path: &Path) -> Option<f64> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Model score not available at {:?}: {}", path, e);
            return None;
        }
    };

    match raw.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Some(score),
        _ => {
            warn!("Model score file {:?} does not contain a number", path);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::LabelEncoder;
    use crate::infrastructure::mock::StaticRegressor;
    use smartcore::ensemble::random_forest_regressor::{
        RandomForestRegressor, RandomForestRegressorParameters,
    };
    use smartcore::linalg::basic::matrix::DenseMatrix;
    use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn three_column_rows() -> (DenseMatrix<f64>, Vec<f64>) {
        let rows = vec![
            vec![25.0, 1.0, 2.0],
            vec![32.0, 0.0, 6.0],
            vec![41.0, 1.0, 12.0],
            vec![47.0, 0.0, 20.0],
            vec![53.0, 1.0, 25.0],
            vec![60.0, 0.0, 31.0],
        ];
        let y = rows.iter().map(|r| 1000.0 * r[0] + 500.0 * r[1] + 200.0 * r[2]).collect();
        (DenseMatrix::from_2d_vec(&rows).unwrap(), y)
    }

    fn linear_on_three_columns() -> SmartCoreRegressor {
        let (x, y) = three_column_rows();
        let model = LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();
        SmartCoreRegressor::linear(model, 3)
    }

    fn forest_on_three_columns() -> SmartCoreRegressor {
        let (x, y) = three_column_rows();
        let params = RandomForestRegressorParameters::default()
            .with_n_trees(4)
            .with_seed(3);
        let model = RandomForestRegressor::fit(&x, &y, params).unwrap();
        SmartCoreRegressor::random_forest(model, 3)
    }

    #[test]
    fn test_rejects_linear_model_width_mismatch() {
        let err = ModelBundle::new(
            linear_on_three_columns(),
            EncoderMap::new(),
            FeatureScaler::Identity,
            names(&["Age", "Years of Experience"]),
        )
        .unwrap_err();
        assert!(matches!(err, BundleError::Invalid { .. }));
        assert!(err.to_string().contains("fitted on 3 features"), "got {}", err);
    }

    #[test]
    fn test_rejects_forest_model_width_mismatch() {
        let err = ModelBundle::new(
            forest_on_three_columns(),
            EncoderMap::new(),
            FeatureScaler::Identity,
            names(&["Age", "Years of Experience"]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Random Forest"), "got {}", err);
    }

    #[test]
    fn test_width_mismatch_rejected_on_load() {
        let artifact = BundleArtifact {
            model: linear_on_three_columns(),
            label_encoders: EncoderMap::new(),
            scaler: FeatureScaler::Identity,
            feature_names: names(&["Age", "Years of Experience"]),
        };
        let path = std::env::temp_dir().join(format!("narrow-{}.json", uuid::Uuid::new_v4()));
        artifact.save(&path).unwrap();

        let err = ModelBundle::load(&path).unwrap_err();
        assert!(matches!(err, BundleError::Invalid { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_matching_width_is_accepted() {
        let bundle = ModelBundle::new(
            forest_on_three_columns(),
            EncoderMap::new(),
            FeatureScaler::Identity,
            names(&["Age", "Gender", "Years of Experience"]),
        )
        .unwrap();
        assert_eq!(bundle.model().n_features(), Some(3));
    }

    #[test]
    fn test_rejects_empty_feature_names() {
        let err = ModelBundle::new(
            StaticRegressor::new(1.0),
            EncoderMap::new(),
            FeatureScaler::Identity,
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, BundleError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_scaler_width_mismatch() {
        let err = ModelBundle::new(
            StaticRegressor::new(1.0),
            EncoderMap::new(),
            FeatureScaler::Standard {
                mean: vec![0.0; 3],
                scale: vec![1.0; 3],
            },
            names(&["Age", "Years of Experience"]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("3 features"));
    }

    #[test]
    fn test_rejects_invalid_encoder() {
        let mut encoders = EncoderMap::new();
        encoders.insert("Gender".to_string(), LabelEncoder::from_classes(Vec::new()));

        let err = ModelBundle::new(
            StaticRegressor::new(1.0),
            encoders,
            FeatureScaler::Identity,
            names(&["Age", "Gender"]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Gender"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let err = ModelBundle::load(&path).unwrap_err();
        assert!(matches!(err, BundleError::Io { .. }));
        assert!(err.to_string().contains("retrain"));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("corrupt-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"{\"model\": 42}").unwrap();

        let err = ModelBundle::load(&path).unwrap_err();
        assert!(matches!(err, BundleError::Parse { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_score() {
        let path = std::env::temp_dir().join(format!("rank-{}.txt", uuid::Uuid::new_v4()));
        std::fs::write(&path, "0.9123\n").unwrap();
        assert_eq!(load_score(&path), Some(0.9123));

        std::fs::write(&path, "not a number").unwrap();
        assert_eq!(load_score(&path), None);
        std::fs::remove_file(&path).ok();

        assert_eq!(load_score(&path), None);
    }
}
