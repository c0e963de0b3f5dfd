//! One button press: inputs in, rendered-ready assessment out.

use medi_risk_model::{ModelError, RiskModel, DECISION_THRESHOLD, N_FEATURES};
use serde::{Deserialize, Serialize};

use crate::derive::{BmiStatus, DerivedFeatures};
use crate::features::FeatureVector;
use crate::inputs::RawInputs;
use crate::tier::PredictionResult;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub inputs: RawInputs,
    pub derived: DerivedFeatures,
    pub features: FeatureVector,
    pub bmi_status: BmiStatus,
    pub result: PredictionResult,
    /// Hard label at [`DECISION_THRESHOLD`].
    pub predicted_class: bool,
}

/// Derive, assemble and score. An error here means the model and the
/// feature assembler disagree, which callers treat as fatal.
pub fn assess(model: &dyn RiskModel, inputs: &RawInputs) -> Result<Assessment, ModelError> {
    debug_assert_eq!(model.n_features(), N_FEATURES, "model trained on another schema");
    let derived = DerivedFeatures::from_inputs(inputs);
    let features = FeatureVector::assemble(inputs, &derived);
    let probability = model.predict_proba(features.as_slice())?;
    let result = PredictionResult::from_probability(probability);
    log::debug!(
        "assessed risk {:.1}% ({}) with model '{}'",
        result.risk_percentage,
        result.risk_tier,
        model.name()
    );
    Ok(Assessment {
        inputs: *inputs,
        derived,
        features,
        bmi_status: derived.bmi_status(),
        result,
        predicted_class: probability >= DECISION_THRESHOLD,
    })
}

/// Machine readable result for `/api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub risk_percentage: f64,
    pub risk_tier: String,
    pub bmi: f64,
    pub bmi_status: String,
    pub diabetes_predicted: bool,
    pub recommendations: Vec<String>,
}

impl From<&Assessment> for ApiResponse {
    fn from(a: &Assessment) -> Self {
        Self {
            risk_percentage: a.result.risk_percentage,
            risk_tier: a.result.risk_tier.label().to_string(),
            bmi: a.derived.bmi,
            bmi_status: a.bmi_status.label().to_string(),
            diabetes_predicted: a.predicted_class,
            recommendations: a
                .result
                .risk_tier
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
