//! Opaque inference artifacts for the diabetes risk predictor.
//!
//! A trained model is a pair of JSON artifacts: a standard scaler and a
//! logistic classifier. Both are loaded once into a [`ModelBundle`], which
//! callers share behind the [`RiskModel`] trait.

pub mod backend;
pub mod bundle;
pub mod classifier;
pub mod error;
pub mod scaler;

pub use backend::{RiskModel, DECISION_THRESHOLD};
pub use bundle::ModelBundle;
pub use classifier::LogisticClassifier;
pub use error::ModelError;
pub use scaler::StandardScaler;

/// Number of features every artifact is trained on.
pub const N_FEATURES: usize = 8;
