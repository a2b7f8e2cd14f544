use super::feature_registry::FeatureVector;
use crate::domain::errors::PipelineError;
use serde::{Deserialize, Serialize};

/// Numeric transform fitted at training time and applied to the ordered
/// feature vector before inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureScaler {
    Identity,
    /// `(x - mean) / scale`; a zero scale leaves the centered value as-is.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`, with `min` the offset already folded in at fit time.
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl FeatureScaler {
    /// Number of features the scaler was fitted on, if it constrains it.
    pub fn n_features(&self) -> Option<usize> {
        match self {
            FeatureScaler::Identity => None,
            FeatureScaler::Standard { mean, .. } => Some(mean.len()),
            FeatureScaler::MinMax { min, .. } => Some(min.len()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let (a, b) = match self {
            FeatureScaler::Identity => return Ok(()),
            FeatureScaler::Standard { mean, scale } => (mean, scale),
            FeatureScaler::MinMax { min, scale } => (min, scale),
        };
        if a.len() != b.len() {
            return Err(format!(
                "scaler parameters disagree: {} offsets vs {} scales",
                a.len(),
                b.len()
            ));
        }
        if a.iter().chain(b.iter()).any(|v| !v.is_finite()) {
            return Err("scaler parameters must be finite".to_string());
        }
        Ok(())
    }

    pub fn transform(&self, row: FeatureVector) -> Result<FeatureVector, PipelineError> {
        if let Some(expected) = self.n_features() {
            if expected != row.len() {
                return Err(PipelineError::DimensionMismatch {
                    stage: "scaler",
                    expected,
                    actual: row.len(),
                });
            }
        }

        let values = match self {
            FeatureScaler::Identity => return Ok(row),
            FeatureScaler::Standard { mean, scale } => row
                .as_slice()
                .iter()
                .zip(mean.iter().zip(scale))
                .map(|(x, (m, s))| {
                    let s = if *s == 0.0 { 1.0 } else { *s };
                    (x - m) / s
                })
                .collect(),
            FeatureScaler::MinMax { min, scale } => row
                .as_slice()
                .iter()
                .zip(min.iter().zip(scale))
                .map(|(x, (m, s))| x * s + m)
                .collect(),
        };

        Ok(FeatureVector::new(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_passes_through() {
        let row = FeatureVector::new(vec![30.0, 1.0, 0.0]);
        assert_eq!(FeatureScaler::Identity.transform(row.clone()).unwrap(), row);
    }

    #[test]
    fn test_standard_scaling() {
        let scaler = FeatureScaler::Standard {
            mean: vec![30.0, 10.0],
            scale: vec![5.0, 0.0],
        };
        let out = scaler
            .transform(FeatureVector::new(vec![40.0, 12.0]))
            .unwrap();
        assert_eq!(out.as_slice(), &[2.0, 2.0]);
    }

    #[test]
    fn test_min_max_scaling() {
        let scaler = FeatureScaler::MinMax {
            min: vec![-0.5],
            scale: vec![0.25],
        };
        let out = scaler.transform(FeatureVector::new(vec![4.0])).unwrap();
        assert_eq!(out.as_slice(), &[0.5]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let scaler = FeatureScaler::Standard {
            mean: vec![0.0; 5],
            scale: vec![1.0; 5],
        };
        let err = scaler
            .transform(FeatureVector::new(vec![1.0, 2.0]))
            .unwrap_err();
        assert_eq!(
            err,
            PipelineError::DimensionMismatch {
                stage: "scaler",
                expected: 5,
                actual: 2
            }
        );
    }

    #[test]
    fn test_deserialize_tagged() {
        let scaler: FeatureScaler =
            serde_json::from_str(r#"{"kind":"standard","mean":[1.0],"scale":[2.0]}"#).unwrap();
        assert_eq!(
            scaler,
            FeatureScaler::Standard {
                mean: vec![1.0],
                scale: vec![2.0]
            }
        );
        assert!(scaler.validate().is_ok());

        let bad = FeatureScaler::MinMax {
            min: vec![0.0, 1.0],
            scale: vec![1.0],
        };
        assert!(bad.validate().is_err());
    }
}
