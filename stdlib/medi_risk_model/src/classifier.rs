//! Binary logistic regression over standardised features.

use serde::{Deserialize, Serialize};

use crate::backend::DECISION_THRESHOLD;
use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticClassifier {
    pub model_name: String,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl LogisticClassifier {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::NonFinite {
                artifact: "classifier",
            });
        }
        Ok(())
    }

    /// Linear score before the logistic link.
    pub fn decision_function(&self, scaled: &[f64]) -> Result<f64, ModelError> {
        if scaled.len() != self.n_features() {
            return Err(ModelError::shape(
                "classifier",
                self.n_features(),
                scaled.len(),
            ));
        }
        let s = self
            .coefficients
            .iter()
            .zip(scaled.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>();
        Ok(s + self.intercept)
    }

    pub fn predict_proba(&self, scaled: &[f64]) -> Result<f64, ModelError> {
        Ok(sigmoid(self.decision_function(scaled)?))
    }

    pub fn predict(&self, scaled: &[f64]) -> Result<bool, ModelError> {
        Ok(self.predict_proba(scaled)? >= DECISION_THRESHOLD)
    }
}
