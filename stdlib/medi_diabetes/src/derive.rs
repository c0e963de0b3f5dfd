//! Numeric features the classifier needs but the form does not ask for directly.

use serde::{Deserialize, Serialize};

use crate::inputs::{FamilyHistory, InsulinCategory, RawInputs};
use crate::tier::Cue;

/// Triceps skin fold thickness in mm. Never asked for; the classifier
/// always sees this mid-range value.
pub const SKIN_THICKNESS: f64 = 30.0;

/// Body mass index: weight in kg over height in metres squared.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    debug_assert!(weight_kg > 0.0 && height_cm > 0.0);
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    /// Each band includes its lower bound.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    pub fn cue(self) -> Cue {
        match self {
            Self::Normal => Cue::Success,
            Self::Underweight | Self::Overweight => Cue::Warning,
            Self::Obese => Cue::Error,
        }
    }
}

impl FamilyHistory {
    /// Stand-in for the diabetes pedigree function.
    pub fn pedigree(self) -> f64 {
        match self {
            Self::None => 0.1,
            Self::Distant => 0.5,
            Self::Immediate => 1.0,
        }
    }
}

impl InsulinCategory {
    /// 2-hour serum insulin (mu U/ml) fed to the classifier.
    pub fn insulin_value(self) -> f64 {
        match self {
            Self::Low => 50.0,
            Self::Normal | Self::Unknown => 150.0,
            Self::High => 250.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub bmi: f64,
    pub diabetes_pedigree: f64,
    pub insulin_value: f64,
    pub skin_thickness: f64,
}

impl DerivedFeatures {
    pub fn from_inputs(inputs: &RawInputs) -> Self {
        Self {
            bmi: bmi(inputs.weight_kg(), inputs.height_cm()),
            diabetes_pedigree: inputs.family_history().pedigree(),
            insulin_value: inputs.insulin().insulin_value(),
            skin_thickness: SKIN_THICKNESS,
        }
    }

    pub fn bmi_status(&self) -> BmiStatus {
        BmiStatus::classify(self.bmi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_of_default_inputs() {
        let d = DerivedFeatures::from_inputs(&RawInputs::default());
        assert!((d.bmi - 24.221_453_287_197_23).abs() < 1e-9);
        assert_eq!(d.bmi_status(), BmiStatus::Normal);
        assert_eq!(d.diabetes_pedigree, 0.1);
        assert_eq!(d.insulin_value, 150.0);
        assert_eq!(d.skin_thickness, SKIN_THICKNESS);
    }

    #[test]
    fn bmi_boundaries_belong_to_the_higher_band() {
        assert_eq!(BmiStatus::classify(18.499), BmiStatus::Underweight);
        assert_eq!(BmiStatus::classify(18.5), BmiStatus::Normal);
        assert_eq!(BmiStatus::classify(24.999), BmiStatus::Normal);
        assert_eq!(BmiStatus::classify(25.0), BmiStatus::Overweight);
        assert_eq!(BmiStatus::classify(29.999), BmiStatus::Overweight);
        assert_eq!(BmiStatus::classify(30.0), BmiStatus::Obese);
    }

    #[test]
    fn pedigree_table() {
        assert_eq!(FamilyHistory::None.pedigree(), 0.1);
        assert_eq!(FamilyHistory::Distant.pedigree(), 0.5);
        assert_eq!(FamilyHistory::Immediate.pedigree(), 1.0);
    }

    #[test]
    fn insulin_table() {
        assert_eq!(InsulinCategory::Low.insulin_value(), 50.0);
        assert_eq!(InsulinCategory::Normal.insulin_value(), 150.0);
        assert_eq!(InsulinCategory::High.insulin_value(), 250.0);
        assert_eq!(InsulinCategory::Unknown.insulin_value(), 150.0);
    }

    #[test]
    fn bmi_cues_follow_the_banner_colours() {
        assert_eq!(BmiStatus::Underweight.cue(), Cue::Warning);
        assert_eq!(BmiStatus::Normal.cue(), Cue::Success);
        assert_eq!(BmiStatus::Overweight.cue(), Cue::Warning);
        assert_eq!(BmiStatus::Obese.cue(), Cue::Error);
    }
}
