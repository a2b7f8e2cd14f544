use crate::domain::errors::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 70;
pub const DEFAULT_AGE: u32 = 30;

pub const MIN_EXPERIENCE: f64 = 0.0;
pub const MAX_EXPERIENCE: f64 = 50.0;
pub const EXPERIENCE_STEP: f64 = 0.5;
pub const DEFAULT_EXPERIENCE: f64 = 5.0;

/// Declares a closed set of form options backed by their display labels.
/// Variants are listed in label order so `ALL` is already sorted.
macro_rules! form_options {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ProfileError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ProfileError::UnknownOption {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

form_options!(Gender, "gender", {
    Female => "Female",
    Male => "Male",
});

form_options!(EducationLevel, "education level", {
    Bachelors => "Bachelor's",
    Masters => "Master's",
    Phd => "PhD",
});

form_options!(JobTitle, "job title", {
    DataAnalyst => "Data Analyst",
    Director => "Director",
    MarketingAnalyst => "Marketing Analyst",
    MarketingCoordinator => "Marketing Coordinator",
    ProductManager => "Product Manager",
    SalesAssociate => "Sales Associate",
    SalesManager => "Sales Manager",
    SeniorManager => "Senior Manager",
    SoftwareEngineer => "Software Engineer",
});

/// One employee as submitted through a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Education Level")]
    pub education: EducationLevel,
    #[serde(rename = "Job Title")]
    pub job_title: JobTitle,
    #[serde(rename = "Years of Experience")]
    pub experience: f64,
}

impl Default for EmployeeProfile {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            gender: Gender::ALL[0],
            education: EducationLevel::ALL[0],
            job_title: JobTitle::ALL[0],
            experience: DEFAULT_EXPERIENCE,
        }
    }
}

impl EmployeeProfile {
    /// Checks the form-level domains. The pipeline itself does not re-validate.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ProfileError::AgeOutOfRange {
                age: self.age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }

        if !self.experience.is_finite()
            || !(MIN_EXPERIENCE..=MAX_EXPERIENCE).contains(&self.experience)
        {
            return Err(ProfileError::ExperienceOutOfRange {
                value: self.experience,
                min: MIN_EXPERIENCE,
                max: MAX_EXPERIENCE,
            });
        }

        if (self.experience / EXPERIENCE_STEP).fract() != 0.0 {
            return Err(ProfileError::ExperienceStep {
                value: self.experience,
                step: EXPERIENCE_STEP,
            });
        }

        Ok(())
    }
}
