/// Interface for trained salary regressors
pub trait SalaryRegressor: Send + Sync {
    /// Predict a salary from one scaled feature row, laid out in the bundle's
    /// feature order
    fn predict(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Row width the model was fitted on, when known
    fn n_features(&self) -> Option<usize> {
        None
    }
}
