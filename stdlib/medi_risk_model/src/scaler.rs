//! Standardisation of raw features before classification.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Per-feature standardisation: `z = (x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Feature names in training order.
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Check internal consistency; called once at load time.
    pub fn validate(&self) -> Result<(), ModelError> {
        let n = self.n_features();
        if self.scale.len() != n {
            return Err(ModelError::shape("scaler scale", n, self.scale.len()));
        }
        if self.feature_names.len() != n {
            return Err(ModelError::shape(
                "scaler feature_names",
                n,
                self.feature_names.len(),
            ));
        }
        if self
            .mean
            .iter()
            .chain(self.scale.iter())
            .any(|v| !v.is_finite())
        {
            return Err(ModelError::NonFinite { artifact: "scaler" });
        }
        Ok(())
    }

    pub fn transform(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.n_features() {
            return Err(ModelError::shape(
                "scaler",
                self.n_features(),
                features.len(),
            ));
        }
        Ok(features
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| {
                // constant features were fitted with a zero scale
                let s = if *s == 0.0 { 1.0 } else { *s };
                (x - m) / s
            })
            .collect())
    }
}
