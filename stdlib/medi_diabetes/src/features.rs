//! Assembly of the fixed-order vector the scaler and classifier were trained on.

use medi_risk_model::N_FEATURES;
use serde::{Deserialize, Serialize};

use crate::derive::DerivedFeatures;
use crate::inputs::RawInputs;

/// Column names in training order. The artifacts carry no schema beyond
/// this list, so the order here must never change.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "Pregnancies",
    "Glucose",
    "BloodPressure",
    "SkinThickness",
    "Insulin",
    "BMI",
    "DiabetesPedigreeFunction",
    "Age",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; N_FEATURES]);

impl FeatureVector {
    pub fn assemble(inputs: &RawInputs, derived: &DerivedFeatures) -> Self {
        Self([
            inputs.pregnancies().into(),
            inputs.glucose().into(),
            inputs.blood_pressure().into(),
            derived.skin_thickness,
            derived.insulin_value,
            derived.bmi,
            derived.diabetes_pedigree,
            inputs.age().into(),
        ])
    }

    pub fn from_inputs(inputs: &RawInputs) -> Self {
        Self::assemble(inputs, &DerivedFeatures::from_inputs(inputs))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

}
