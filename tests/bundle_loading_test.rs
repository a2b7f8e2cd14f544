use salary_predictor::application::bootstrap::ServicesBootstrap;
use salary_predictor::application::ml::{BundleArtifact, SmartCoreRegressor};
use salary_predictor::config::Config;
use salary_predictor::domain::employee::{EducationLevel, EmployeeProfile, Gender, JobTitle};
use salary_predictor::domain::errors::BundleError;
use salary_predictor::domain::ml::{EncoderMap, FeatureScaler, LabelEncoder};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use std::collections::HashMap;
use std::path::PathBuf;

struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("salary-predictor-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn join(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.0).ok();
    }
}

fn salary(row: &[f64]) -> f64 {
    // Age, Gender, Education Level, Job Title, Years of Experience
    10000.0 + 500.0 * row[0] + 2000.0 * row[1] + 8000.0 * row[2] + 1500.0 * row[3] + 3000.0 * row[4]
}

/// Linear model fitted on scaled rows, with mean/scale chosen so scaling is
/// not a no-op.
fn write_artifact(dir: &TempDir) -> PathBuf {
    let mean = vec![40.0, 0.5, 1.0, 4.0, 10.0];
    let scale = vec![10.0, 0.5, 1.0, 2.0, 5.0];

    let raw_rows = vec![
        vec![22.0, 0.0, 0.0, 0.0, 0.5],
        vec![25.0, 1.0, 1.0, 3.0, 2.0],
        vec![31.0, 0.0, 2.0, 8.0, 6.0],
        vec![38.0, 1.0, 0.0, 5.0, 12.0],
        vec![44.0, 0.0, 1.0, 1.0, 18.0],
        vec![50.0, 1.0, 2.0, 7.0, 25.0],
        vec![57.0, 1.0, 1.0, 2.0, 30.0],
        vec![63.0, 0.0, 0.0, 6.0, 35.5],
        vec![29.0, 1.0, 2.0, 4.0, 4.0],
        vec![35.0, 0.0, 1.0, 8.0, 9.5],
    ];
    let scaled: Vec<Vec<f64>> = raw_rows
        .iter()
        .map(|r| {
            r.iter()
                .zip(mean.iter().zip(&scale))
                .map(|(x, (m, s))| (x - m) / s)
                .collect()
        })
        .collect();
    let y: Vec<f64> = scaled.iter().map(|r| salary(r)).collect();

    let x = DenseMatrix::from_2d_vec(&scaled).unwrap();
    let model = LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();

    let mut label_encoders = EncoderMap::new();
    label_encoders.insert("Gender".to_string(), LabelEncoder::fit(["Male", "Female"]));
    label_encoders.insert(
        "Education Level".to_string(),
        LabelEncoder::fit(["PhD", "Bachelor's", "Master's"]),
    );
    label_encoders.insert(
        "Job Title".to_string(),
        LabelEncoder::fit(JobTitle::ALL.iter().map(|t| t.label())),
    );

    let artifact = BundleArtifact {
        model: SmartCoreRegressor::linear(model, 5),
        label_encoders,
        scaler: FeatureScaler::Standard { mean, scale },
        feature_names: [
            "Age",
            "Gender",
            "Education Level",
            "Job Title",
            "Years of Experience",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    };

    let path = dir.join("model.json");
    artifact.save(&path).unwrap();
    path
}

fn config_for(dir: &TempDir, model_path: &PathBuf) -> Config {
    let mut vars = HashMap::new();
    vars.insert("MODEL_PATH", model_path.display().to_string());
    vars.insert("MODEL_SCORE_PATH", dir.join("model_rank.txt").display().to_string());
    vars.insert("RATE_MODE", "fixed".to_string());
    vars.insert("FIXED_RATE", "80.0".to_string());
    Config::from_lookup(&move |key| vars.get(key).cloned()).unwrap()
}

#[tokio::test]
async fn test_saved_bundle_round_trips_through_bootstrap() {
    let dir = TempDir::new();
    let model_path = write_artifact(&dir);
    std::fs::write(dir.join("model_rank.txt"), "0.9731").unwrap();

    let service = ServicesBootstrap::init(&config_for(&dir, &model_path)).unwrap();
    assert_eq!(service.model_score(), Some(0.9731));
    assert_eq!(service.feature_names().len(), 5);

    let profile = EmployeeProfile {
        age: 30,
        gender: Gender::Male,
        education: EducationLevel::Masters,
        job_title: JobTitle::ProductManager,
        experience: 5.0,
    };
    // Male=1, Master's=1, Product Manager=4 -> scaled [-1, 1, 0, 0, -1]
    let expected = salary(&[-1.0, 1.0, 0.0, 0.0, -1.0]);

    let estimate = service.estimate(&profile).await.unwrap();
    assert!(
        (estimate.base_salary - expected).abs() < 1e-3,
        "expected {}, got {}",
        expected,
        estimate.base_salary
    );
    assert_eq!(estimate.rate, 80.0);
    assert!((estimate.converted_salary - expected * 80.0).abs() < 1e-1);
}

#[test]
fn test_missing_score_file_is_not_fatal() {
    let dir = TempDir::new();
    let model_path = write_artifact(&dir);

    let service = ServicesBootstrap::init(&config_for(&dir, &model_path)).unwrap();
    assert_eq!(service.model_score(), None);
}

#[test]
fn test_missing_bundle_fails_startup() {
    let dir = TempDir::new();
    let err = ServicesBootstrap::init(&config_for(&dir, &dir.join("absent.json"))).unwrap_err();

    assert!(matches!(err, BundleError::Io { .. }));
    assert!(err.to_string().starts_with("Please retrain the model first"));
}

#[test]
fn test_corrupt_bundle_fails_startup() {
    let dir = TempDir::new();
    let path = dir.join("model.json");
    std::fs::write(&path, "{\"feature_names\": [\"Age\"]}").unwrap();

    let err = ServicesBootstrap::init(&config_for(&dir, &path)).unwrap_err();
    assert!(matches!(err, BundleError::Parse { .. }));
}
