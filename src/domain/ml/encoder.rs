use super::feature_registry::{FeatureRecord, FeatureValue};
use crate::domain::errors::PipelineError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Categorical column name -> encoder, as stored in the model bundle.
pub type EncoderMap = HashMap<String, LabelEncoder>;

/// Maps category labels to integer codes. The code of a label is its index in
/// `classes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Learns the vocabulary from observed labels: sorted and de-duplicated.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Uses `classes` as-is, so codes follow the given order.
    pub fn from_classes(classes: Vec<String>) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|class| class == label)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("encoder has no classes".to_string());
        }
        for (i, class) in self.classes.iter().enumerate() {
            if self.classes[..i].contains(class) {
                return Err(format!("duplicate class '{}'", class));
            }
        }
        Ok(())
    }
}

/// Replaces each label that has a registered encoder with its integer code.
/// Numeric columns and labels without an encoder pass through unchanged.
pub fn encode_record(
    mut record: FeatureRecord,
    encoders: &EncoderMap,
) -> Result<FeatureRecord, PipelineError> {
    let mut encoded = Vec::new();

    for (column, value) in record.columns() {
        let FeatureValue::Label(label) = value else {
            continue;
        };
        let Some(encoder) = encoders.get(column.name()) else {
            continue;
        };

        let code = encoder
            .transform(label)
            .ok_or_else(|| PipelineError::UnknownCategory {
                column: column.name().to_string(),
                label: label.clone(),
            })?;
        encoded.push((column, code));
    }

    for (column, code) in encoded {
        record.set(column, FeatureValue::Numeric(code as f64));
    }

    Ok(record)
}
