//! Loading the scaler/classifier pair from disk.

use std::fs::read_to_string;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::backend::RiskModel;
use crate::classifier::LogisticClassifier;
use crate::error::ModelError;
use crate::scaler::StandardScaler;
use crate::N_FEATURES;

/// A validated scaler and classifier, loaded once and then only read.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    classifier: LogisticClassifier,
    scaler: StandardScaler,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let s = read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&s).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl ModelBundle {
    /// Read both artifacts and validate their shapes.
    pub fn load(
        classifier_path: impl AsRef<Path>,
        scaler_path: impl AsRef<Path>,
    ) -> Result<Self, ModelError> {
        let classifier_path = classifier_path.as_ref();
        let scaler_path = scaler_path.as_ref();
        let classifier: LogisticClassifier = read_json(classifier_path)?;
        let scaler: StandardScaler = read_json(scaler_path)?;
        let bundle = Self::from_parts(classifier, scaler)?;
        log::info!(
            "loaded model '{}' from {} (scaler {})",
            bundle.classifier.model_name,
            classifier_path.display(),
            scaler_path.display()
        );
        Ok(bundle)
    }

    pub fn from_parts(
        classifier: LogisticClassifier,
        scaler: StandardScaler,
    ) -> Result<Self, ModelError> {
        scaler.validate()?;
        classifier.validate()?;
        if scaler.n_features() != N_FEATURES {
            return Err(ModelError::shape("scaler", N_FEATURES, scaler.n_features()));
        }
        if classifier.n_features() != N_FEATURES {
            return Err(ModelError::shape(
                "classifier",
                N_FEATURES,
                classifier.n_features(),
            ));
        }
        Ok(Self { classifier, scaler })
    }

    /// Fail unless the scaler was fitted on exactly `names`, in this order.
    pub fn expect_feature_names(&self, names: &[&str]) -> Result<(), ModelError> {
        if self.scaler.feature_names.iter().map(String::as_str).ne(names.iter().copied()) {
            return Err(ModelError::Mismatch {
                scaler: self.scaler.feature_names.clone(),
                expected: names.iter().map(|s| s.to_string()).collect(),
            });
        }
        Ok(())
    }
}

impl RiskModel for ModelBundle {
    fn name(&self) -> &str {
        &self.classifier.model_name
    }

    fn n_features(&self) -> usize {
        N_FEATURES
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, ModelError> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict_proba(&scaled)
    }

    fn predict(&self, features: &[f64]) -> Result<bool, ModelError> {
        let scaled = self.scaler.transform(features)?;
        self.classifier.predict(&scaled)
    }
}
