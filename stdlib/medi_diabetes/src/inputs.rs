//! The eight form fields and the only ways to turn them into [`RawInputs`].
//!
//! Every bound is checked here. Once a `RawInputs` exists its values are
//! known to be in range, so the derivation and inference steps never
//! validate again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be a whole number, got {value}")]
    NotWhole { field: &'static str, value: f64 },
    #[error("{field} has no option '{value}'")]
    UnknownCategory { field: &'static str, value: String },
}

/// Bounds, default and copy for one numeric form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Form key, also the JSON key.
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// `true` for counts and integer readings.
    pub whole: bool,
    pub help: &'static str,
}

pub const AGE: FieldSpec = FieldSpec {
    key: "age",
    label: "Age",
    unit: "years",
    min: 20.0,
    max: 90.0,
    default: 40.0,
    whole: true,
    help: "Enter your current age",
};

pub const WEIGHT: FieldSpec = FieldSpec {
    key: "weight",
    label: "Weight",
    unit: "kg",
    min: 30.0,
    max: 200.0,
    default: 70.0,
    whole: false,
    help: "Enter your weight in kilograms",
};

pub const HEIGHT: FieldSpec = FieldSpec {
    key: "height",
    label: "Height",
    unit: "cm",
    min: 100.0,
    max: 250.0,
    default: 170.0,
    whole: false,
    help: "Enter your height in centimeters",
};

pub const GLUCOSE: FieldSpec = FieldSpec {
    key: "glucose",
    label: "Blood Sugar Level",
    unit: "mg/dL",
    min: 70.0,
    max: 300.0,
    default: 100.0,
    whole: true,
    help: "Fasting blood glucose level from your most recent test",
};

pub const BLOOD_PRESSURE: FieldSpec = FieldSpec {
    key: "blood_pressure",
    label: "Blood Pressure (systolic)",
    unit: "mmHg",
    min: 60.0,
    max: 180.0,
    default: 120.0,
    whole: true,
    help: "The top number from your blood pressure reading (e.g., 120 in 120/80)",
};

pub const PREGNANCIES: FieldSpec = FieldSpec {
    key: "pregnancies",
    label: "Number of Pregnancies",
    unit: "count",
    min: 0.0,
    max: 15.0,
    default: 0.0,
    whole: true,
    help: "Enter 0 if male or if never pregnant",
};

pub const FAMILY_HISTORY_LABEL: &str = "Do you have family members with diabetes?";
pub const FAMILY_HISTORY_HELP: &str = "Select based on your family history";
pub const INSULIN_LABEL: &str = "Insulin Level";
pub const INSULIN_HELP: &str = "Based on your most recent blood test";

impl FieldSpec {
    pub fn check(&self, value: f64) -> Result<f64, InputError> {
        if !value.is_finite() {
            return Err(InputError::NotANumber {
                field: self.label,
                value: value.to_string(),
            });
        }
        if self.whole && value.fract() != 0.0 {
            return Err(InputError::NotWhole {
                field: self.label,
                value,
            });
        }
        if value < self.min || value > self.max {
            return Err(InputError::OutOfRange {
                field: self.label,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    fn parse(&self, raw: &FieldValue) -> Result<f64, InputError> {
        let value = match raw {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().map_err(|_| InputError::NotANumber {
                field: self.label,
                value: s.clone(),
            })?,
        };
        self.check(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FamilyHistory {
    #[default]
    None,
    Distant,
    Immediate,
}

impl FamilyHistory {
    pub const ALL: [FamilyHistory; 3] = [Self::None, Self::Distant, Self::Immediate];

    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Distant => "distant",
            Self::Immediate => "immediate",
        }
    }

    /// Wording shown next to the radio button.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No",
            Self::Distant => "Yes, distant relatives",
            Self::Immediate => "Yes, parents or siblings",
        }
    }
}

impl FromStr for FamilyHistory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(t) || f.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| InputError::UnknownCategory {
                field: "Family history",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for FamilyHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InsulinCategory {
    Low,
    Normal,
    High,
    #[default]
    Unknown,
}

impl InsulinCategory {
    pub const ALL: [InsulinCategory; 4] = [Self::Low, Self::Normal, Self::High, Self::Unknown];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Unknown => "Unknown",
        }
    }
}

impl FromStr for InsulinCategory {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(t))
            .ok_or_else(|| InputError::UnknownCategory {
                field: "Insulin",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for InsulinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One fully populated, range-checked form submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputs {
    age: u8,
    weight_kg: f64,
    height_cm: f64,
    family_history: FamilyHistory,
    glucose: u16,
    blood_pressure: u16,
    insulin: InsulinCategory,
    pregnancies: u8,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            age: AGE.default as u8,
            weight_kg: WEIGHT.default,
            height_cm: HEIGHT.default,
            family_history: FamilyHistory::default(),
            glucose: GLUCOSE.default as u16,
            blood_pressure: BLOOD_PRESSURE.default as u16,
            insulin: InsulinCategory::default(),
            pregnancies: PREGNANCIES.default as u8,
        }
    }
}

impl RawInputs {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        family_history: FamilyHistory,
        glucose: u32,
        blood_pressure: u32,
        insulin: InsulinCategory,
        pregnancies: u32,
    ) -> Result<Self, InputError> {
        // every check passed, so the narrowing casts below are lossless
        Ok(Self {
            age: AGE.check(age as f64)? as u8,
            weight_kg: WEIGHT.check(weight_kg)?,
            height_cm: HEIGHT.check(height_cm)?,
            family_history,
            glucose: GLUCOSE.check(glucose as f64)? as u16,
            blood_pressure: BLOOD_PRESSURE.check(blood_pressure as f64)? as u16,
            insulin,
            pregnancies: PREGNANCIES.check(pregnancies as f64)? as u8,
        })
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn family_history(&self) -> FamilyHistory {
        self.family_history
    }

    pub fn glucose(&self) -> u16 {
        self.glucose
    }

    pub fn blood_pressure(&self) -> u16 {
        self.blood_pressure
    }

    pub fn insulin(&self) -> InsulinCategory {
        self.insulin
    }

    pub fn pregnancies(&self) -> u8 {
        self.pregnancies
    }
}

/// A single submitted value: form posts carry text, JSON bodies numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// What arrives on the wire. Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub age: Option<FieldValue>,
    pub weight: Option<FieldValue>,
    pub height: Option<FieldValue>,
    pub family_history: Option<String>,
    pub glucose: Option<FieldValue>,
    pub blood_pressure: Option<FieldValue>,
    pub insulin: Option<String>,
    pub pregnancies: Option<FieldValue>,
}

fn numeric(spec: &FieldSpec, raw: &Option<FieldValue>) -> Result<f64, InputError> {
    match raw {
        Some(FieldValue::Text(s)) if s.trim().is_empty() => Ok(spec.default),
        Some(v) => spec.parse(v),
        None => Ok(spec.default),
    }
}

fn category<T: FromStr<Err = InputError> + Default>(raw: &Option<String>) -> Result<T, InputError> {
    match raw.as_deref() {
        Some(s) if !s.trim().is_empty() => s.parse(),
        _ => Ok(T::default()),
    }
}

impl FormSubmission {
    pub fn to_inputs(&self) -> Result<RawInputs, InputError> {
        let family_history = category(&self.family_history)?;
        let insulin = category(&self.insulin)?;
        Ok(RawInputs {
            age: numeric(&AGE, &self.age)? as u8,
            weight_kg: numeric(&WEIGHT, &self.weight)?,
            height_cm: numeric(&HEIGHT, &self.height)?,
            family_history,
            glucose: numeric(&GLUCOSE, &self.glucose)? as u16,
            blood_pressure: numeric(&BLOOD_PRESSURE, &self.blood_pressure)? as u16,
            insulin,
            pregnancies: numeric(&PREGNANCIES, &self.pregnancies)? as u8,
        })
    }

    /// Every field that checks out, with defaults standing in for the rest.
    /// Used to refill the form after a rejected submission.
    pub fn salvage(&self) -> RawInputs {
        let or_default = |spec: &FieldSpec, raw: &Option<FieldValue>| {
            numeric(spec, raw).unwrap_or(spec.default)
        };
        RawInputs {
            age: or_default(&AGE, &self.age) as u8,
            weight_kg: or_default(&WEIGHT, &self.weight),
            height_cm: or_default(&HEIGHT, &self.height),
            family_history: category(&self.family_history).unwrap_or_default(),
            glucose: or_default(&GLUCOSE, &self.glucose) as u16,
            blood_pressure: or_default(&BLOOD_PRESSURE, &self.blood_pressure) as u16,
            insulin: category(&self.insulin).unwrap_or_default(),
            pregnancies: or_default(&PREGNANCIES, &self.pregnancies) as u8,
        }
    }
}

impl From<&RawInputs> for FormSubmission {
    fn from(inputs: &RawInputs) -> Self {
        Self {
            age: Some(FieldValue::Number(inputs.age.into())),
            weight: Some(FieldValue::Number(inputs.weight_kg)),
            height: Some(FieldValue::Number(inputs.height_cm)),
            family_history: Some(inputs.family_history.key().to_string()),
            glucose: Some(FieldValue::Number(inputs.glucose.into())),
            blood_pressure: Some(FieldValue::Number(inputs.blood_pressure.into())),
            insulin: Some(inputs.insulin.label().to_string()),
            pregnancies: Some(FieldValue::Number(inputs.pregnancies.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_form_table() {
        let d = RawInputs::default();
        assert_eq!(d.age(), 40);
        assert_eq!(d.weight_kg(), 70.0);
        assert_eq!(d.height_cm(), 170.0);
        assert_eq!(d.family_history(), FamilyHistory::None);
        assert_eq!(d.glucose(), 100);
        assert_eq!(d.blood_pressure(), 120);
        assert_eq!(d.insulin(), InsulinCategory::Unknown);
        assert_eq!(d.pregnancies(), 0);
    }

    #[test]
    fn empty_submission_is_all_defaults() {
        let inputs = FormSubmission::default().to_inputs().unwrap();
        assert_eq!(inputs, RawInputs::default());
    }

    #[test]
    fn zero_height_and_weight_are_rejected() {
        let sub = FormSubmission {
            height: Some(0.0.into()),
            ..Default::default()
        };
        assert_eq!(
            sub.to_inputs().unwrap_err(),
            InputError::OutOfRange {
                field: "Height",
                value: 0.0,
                min: 100.0,
                max: 250.0
            }
        );

        let sub = FormSubmission {
            weight: Some("0".into()),
            ..Default::default()
        };
        assert!(matches!(
            sub.to_inputs(),
            Err(InputError::OutOfRange { field: "Weight", .. })
        ));
    }

    #[test]
    fn bounds_are_inclusive() {
        use FamilyHistory as F;
        use InsulinCategory as I;
        assert!(RawInputs::new(20, 30.0, 100.0, F::None, 70, 60, I::Low, 0).is_ok());
        assert!(RawInputs::new(90, 200.0, 250.0, F::Immediate, 300, 180, I::High, 15).is_ok());
        assert!(RawInputs::new(91, 70.0, 170.0, F::None, 100, 120, I::Unknown, 0).is_err());
        assert!(RawInputs::new(40, 70.0, 170.0, F::None, 100, 120, I::Unknown, 16).is_err());
        assert!(RawInputs::new(40, 29.9, 170.0, F::None, 100, 120, I::Unknown, 0).is_err());
    }

    #[test]
    fn whole_number_fields_reject_fractions() {
        let sub = FormSubmission {
            age: Some("41.5".into()),
            ..Default::default()
        };
        assert!(matches!(
            sub.to_inputs(),
            Err(InputError::NotWhole { field: "Age", .. })
        ));
    }

    #[test]
    fn garbage_text_is_not_a_number() {
        let sub = FormSubmission {
            glucose: Some("high".into()),
            ..Default::default()
        };
        assert!(matches!(
            sub.to_inputs(),
            Err(InputError::NotANumber { field: "Blood Sugar Level", .. })
        ));
    }

    #[test]
    fn categories_parse_from_labels_and_keys() {
        assert_eq!(
            "Yes, parents or siblings".parse::<FamilyHistory>().unwrap(),
            FamilyHistory::Immediate
        );
        assert_eq!(
            "distant".parse::<FamilyHistory>().unwrap(),
            FamilyHistory::Distant
        );
        assert_eq!("No".parse::<FamilyHistory>().unwrap(), FamilyHistory::None);
        assert_eq!("high".parse::<InsulinCategory>().unwrap(), InsulinCategory::High);
        assert!("maybe".parse::<FamilyHistory>().is_err());
        assert!("sky-high".parse::<InsulinCategory>().is_err());
    }

    #[test]
    fn salvage_keeps_valid_fields_and_defaults_the_rest() {
        let sub = FormSubmission {
            age: Some("63".into()),
            weight: Some("95.5".into()),
            height: Some("0".into()),
            family_history: Some("immediate".into()),
            insulin: Some("sky-high".into()),
            glucose: Some(210.0.into()),
            ..Default::default()
        };
        assert!(sub.to_inputs().is_err());

        let kept = sub.salvage();
        assert_eq!(kept.age(), 63);
        assert_eq!(kept.weight_kg(), 95.5);
        assert_eq!(kept.height_cm(), HEIGHT.default);
        assert_eq!(kept.family_history(), FamilyHistory::Immediate);
        assert_eq!(kept.insulin(), InsulinCategory::Unknown);
        assert_eq!(kept.glucose(), 210);
        assert_eq!(kept.blood_pressure(), 120);
    }

    #[test]
    fn submission_round_trips_through_raw_inputs() {
        let inputs = RawInputs::new(
            55,
            82.5,
            181.0,
            FamilyHistory::Distant,
            140,
            135,
            InsulinCategory::High,
            2,
        )
        .unwrap();
        let back = FormSubmission::from(&inputs).to_inputs().unwrap();
        assert_eq!(back, inputs);
    }
}
