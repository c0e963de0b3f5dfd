//! Diabetes risk assessment on top of an opaque scaler/classifier pair.
//!
//! The flow is strictly linear: [`FormSubmission`] is checked into
//! [`RawInputs`], [`DerivedFeatures`] adds BMI, pedigree and insulin,
//! [`FeatureVector`] fixes the column order, the model returns a
//! probability and [`PredictionResult`] buckets it into a [`RiskTier`].

pub mod assess;
pub mod derive;
pub mod features;
pub mod gauge;
pub mod inputs;
pub mod page;
pub mod tier;

pub use assess::{assess, ApiResponse, Assessment};
pub use derive::{bmi, BmiStatus, DerivedFeatures, SKIN_THICKNESS};
pub use features::{FeatureVector, FEATURE_NAMES};
pub use gauge::Gauge;
pub use inputs::{FamilyHistory, FormSubmission, InputError, InsulinCategory, RawInputs};
pub use page::Page;
pub use tier::{Cue, PredictionResult, RiskTier, HIGH_LOWER, LOW_UPPER};
