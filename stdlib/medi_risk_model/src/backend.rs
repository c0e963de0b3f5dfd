//! The black-box inference interface

use crate::error::ModelError;

/// Probability at and above which the positive class is predicted.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Anything that turns an assembled feature vector into the probability
/// that diabetes is present.
///
/// Implementations must be deterministic: identical inputs yield identical
/// outputs for the lifetime of the value.
pub trait RiskModel: Send + Sync {
    /// Human readable identifier, used in logs.
    fn name(&self) -> &str;

    /// Number of features `predict_proba` expects.
    fn n_features(&self) -> usize;

    /// Probability in `[0, 1]` of the positive class.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Hard class label at [`DECISION_THRESHOLD`].
    fn predict(&self, features: &[f64]) -> Result<bool, ModelError> {
        Ok(self.predict_proba(features)? >= DECISION_THRESHOLD)
    }
}
