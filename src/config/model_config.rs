//! Model bundle location parsing from environment variables.

use super::Lookup;
use std::path::PathBuf;

/// Model bundle configuration
#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_path: PathBuf,
    pub score_path: PathBuf,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.json"),
            score_path: PathBuf::from("model_rank.txt"),
        }
    }
}

impl ModelEnvConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = Self::default();
        Self {
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            score_path: lookup("MODEL_SCORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.score_path),
        }
    }
}
