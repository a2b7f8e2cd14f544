use crate::domain::employee::EmployeeProfile;
use crate::domain::errors::PipelineError;

/// Source columns of an input record, in the order the form produces them.
/// The names are the ones used when the model was trained and are part of the
/// bundle contract: renaming any of them breaks every existing bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureColumn {
    Age,
    Gender,
    EducationLevel,
    JobTitle,
    YearsOfExperience,
}

impl FeatureColumn {
    pub const ALL: [FeatureColumn; 5] = [
        FeatureColumn::Age,
        FeatureColumn::Gender,
        FeatureColumn::EducationLevel,
        FeatureColumn::JobTitle,
        FeatureColumn::YearsOfExperience,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FeatureColumn::Age => "Age",
            FeatureColumn::Gender => "Gender",
            FeatureColumn::EducationLevel => "Education Level",
            FeatureColumn::JobTitle => "Job Title",
            FeatureColumn::YearsOfExperience => "Years of Experience",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Label(String),
}

/// A single input row with exactly one value per [`FeatureColumn`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    values: [FeatureValue; 5],
}

impl FeatureRecord {
    pub fn from_profile(profile: &EmployeeProfile) -> Self {
        Self {
            values: [
                FeatureValue::Numeric(f64::from(profile.age)),
                FeatureValue::Label(profile.gender.label().to_string()),
                FeatureValue::Label(profile.education.label().to_string()),
                FeatureValue::Label(profile.job_title.label().to_string()),
                FeatureValue::Numeric(profile.experience),
            ],
        }
    }

    pub fn get(&self, column: FeatureColumn) -> &FeatureValue {
        &self.values[column.index()]
    }

    pub fn set(&mut self, column: FeatureColumn, value: FeatureValue) {
        self.values[column.index()] = value;
    }

    pub fn columns(&self) -> impl Iterator<Item = (FeatureColumn, &FeatureValue)> {
        FeatureColumn::ALL
            .into_iter()
            .map(move |column| (column, self.get(column)))
    }
}

/// The column order a model expects, resolved against [`FeatureColumn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    columns: Vec<FeatureColumn>,
}

impl FeatureLayout {
    /// Resolves feature names recorded at training time.
    /// A name the input record cannot provide is a `FeatureMismatch`.
    pub fn resolve<S: AsRef<str>>(feature_names: &[S]) -> Result<Self, PipelineError> {
        let columns = feature_names
            .iter()
            .map(|name| {
                FeatureColumn::from_name(name.as_ref()).ok_or_else(|| {
                    PipelineError::FeatureMismatch {
                        column: name.as_ref().to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Projects an encoded record onto this layout. Columns the layout does
    /// not list are dropped; every selected value must already be numeric.
    pub fn arrange(&self, record: &FeatureRecord) -> Result<FeatureVector, PipelineError> {
        let values = self
            .columns
            .iter()
            .map(|column| match record.get(*column) {
                FeatureValue::Numeric(value) => Ok(*value),
                FeatureValue::Label(_) => Err(PipelineError::NonNumericFeature {
                    column: column.name().to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureVector::new(values))
    }
}

/// Numeric row handed to the scaler and then the regressor.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{EducationLevel, Gender, JobTitle};

    fn profile() -> EmployeeProfile {
        EmployeeProfile {
            age: 41,
            gender: Gender::Female,
            education: EducationLevel::Phd,
            job_title: JobTitle::Director,
            experience: 16.5,
        }
    }

    #[test]
    fn test_column_names_round_trip() {
        for column in FeatureColumn::ALL {
            assert_eq!(FeatureColumn::from_name(column.name()), Some(column));
        }
        assert_eq!(FeatureColumn::from_name("age"), None);
    }

    #[test]
    fn test_record_from_profile() {
        let record = FeatureRecord::from_profile(&profile());
        assert_eq!(record.get(FeatureColumn::Age), &FeatureValue::Numeric(41.0));
        assert_eq!(
            record.get(FeatureColumn::JobTitle),
            &FeatureValue::Label("Director".to_string())
        );
        assert_eq!(
            record.get(FeatureColumn::YearsOfExperience),
            &FeatureValue::Numeric(16.5)
        );
    }

    #[test]
    fn test_layout_rejects_unknown_column() {
        let err = FeatureLayout::resolve(&["Age", "Salary"]).unwrap_err();
        assert_eq!(
            err,
            PipelineError::FeatureMismatch {
                column: "Salary".to_string()
            }
        );
    }

    #[test]
    fn test_arrange_drops_unlisted_columns() {
        let layout = FeatureLayout::resolve(&["Years of Experience", "Age"]).unwrap();
        let record = FeatureRecord::from_profile(&profile());

        let vector = layout.arrange(&record).unwrap();
        assert_eq!(vector.as_slice(), &[16.5, 41.0]);
    }

    #[test]
    fn test_arrange_rejects_raw_labels() {
        let layout = FeatureLayout::resolve(&["Age", "Gender"]).unwrap();
        let record = FeatureRecord::from_profile(&profile());

        let err = layout.arrange(&record).unwrap_err();
        assert!(matches!(err, PipelineError::NonNumericFeature { column } if column == "Gender"));
    }
}
