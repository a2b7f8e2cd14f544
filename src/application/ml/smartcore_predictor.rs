use super::predictor::SalaryRegressor;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;

pub type RandomForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type LinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Regressors a bundle artifact may carry, serialized with smartcore's serde
/// support as `{"kind": ..., "params": {"n_features": ..., "model": ...}}`.
///
/// smartcore panics when a row does not match the width a model was fitted
/// on, so that width is stored with the model and checked before predicting.
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum SmartCoreRegressor {
    RandomForest {
        n_features: usize,
        model: RandomForestModel,
    },
    Linear {
        n_features: usize,
        model: LinearModel,
    },
}

impl SmartCoreRegressor {
    pub fn random_forest(model: RandomForestModel, n_features: usize) -> Self {
        Self::RandomForest { n_features, model }
    }

    pub fn linear(model: LinearModel, n_features: usize) -> Self {
        Self::Linear { n_features, model }
    }

    fn width(&self) -> usize {
        match self {
            Self::RandomForest { n_features, .. } | Self::Linear { n_features, .. } => *n_features,
        }
    }
}

impl SalaryRegressor for SmartCoreRegressor {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        if features.len() != self.width() {
            return Err(format!(
                "{} expects {} features, got {}",
                self.name(),
                self.width(),
                features.len()
            ));
        }

        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let predictions = match self {
            SmartCoreRegressor::RandomForest { model, .. } => model.predict(&input_matrix),
            SmartCoreRegressor::Linear { model, .. } => model.predict(&input_matrix),
        }
        .map_err(|e| format!("Prediction failed: {}", e))?;

        predictions
            .first()
            .copied()
            .ok_or_else(|| "No prediction returned".to_string())
    }

    fn name(&self) -> &str {
        match self {
            SmartCoreRegressor::RandomForest { .. } => "SmartCore Random Forest",
            SmartCoreRegressor::Linear { .. } => "SmartCore Linear Regression",
        }
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.width())
    }
}
