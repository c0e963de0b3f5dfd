//! Error types for artifact loading and inference

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading artifacts or running inference.
///
/// None of these are transient: each one means the deployment or the
/// feature assembler is broken.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{artifact} expects {expected} features, got {found}")]
    Shape {
        artifact: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{artifact} contains a non-finite value")]
    NonFinite { artifact: &'static str },
    #[error("scaler features {scaler:?} do not match the assembler's column order {expected:?}")]
    Mismatch {
        scaler: Vec<String>,
        expected: Vec<String>,
    },
}

impl ModelError {
    pub(crate) fn shape(artifact: &'static str, expected: usize, found: usize) -> Self {
        ModelError::Shape {
            artifact,
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_names_artifact_and_counts() {
        let err = ModelError::shape("scaler", 8, 7);
        assert_eq!(err.to_string(), "scaler expects 8 features, got 7");
    }

    #[test]
    fn mismatch_names_the_assembler_order() {
        let err = ModelError::Mismatch {
            scaler: vec!["Age".into()],
            expected: vec!["Pregnancies".into()],
        };
        assert_eq!(
            err.to_string(),
            "scaler features [\"Age\"] do not match the assembler's column order [\"Pregnancies\"]"
        );
    }
}
