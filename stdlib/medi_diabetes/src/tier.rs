//! Risk tiers, their colours and the recommendation copy for each.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the low tier, in percent.
pub const LOW_UPPER: f64 = 33.0;
/// Lower bound (inclusive) of the high tier, in percent.
pub const HIGH_LOWER: f64 = 66.0;

/// Alert style used for banners and recommendation boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    Success,
    Warning,
    Error,
}

impl Cue {
    pub fn css_class(self) -> &'static str {
        match self {
            Cue::Success => "alert-success",
            Cue::Warning => "alert-warning",
            Cue::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_percentage(risk_percentage: f64) -> Self {
        debug_assert!(!risk_percentage.is_nan());
        if risk_percentage < LOW_UPPER {
            RiskTier::Low
        } else if risk_percentage < HIGH_LOWER {
            RiskTier::Medium
        } else {
            RiskTier::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }

    /// Colour of the tier heading.
    pub fn color(self) -> &'static str {
        match self {
            RiskTier::Low => "green",
            RiskTier::Medium => "orange",
            RiskTier::High => "red",
        }
    }

    pub fn cue(self) -> Cue {
        match self {
            RiskTier::Low => Cue::Success,
            RiskTier::Medium => Cue::Warning,
            RiskTier::High => Cue::Error,
        }
    }

    pub fn recommendations(self) -> &'static [&'static str] {
        match self {
            RiskTier::Low => &[
                "Maintain your healthy lifestyle",
                "Continue regular check-ups",
                "Stay active and eat well",
            ],
            RiskTier::Medium => &[
                "Consult with your healthcare provider",
                "Monitor your blood sugar regularly",
                "Consider lifestyle modifications",
            ],
            RiskTier::High => &[
                "Seek immediate medical consultation",
                "Regular monitoring is essential",
                "Strict lifestyle changes may be needed",
            ],
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability of diabetes scaled to `[0, 100]`.
    pub risk_percentage: f64,
    pub risk_tier: RiskTier,
}

impl PredictionResult {
    pub fn from_probability(probability: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "model returned probability {probability}"
        );
        let risk_percentage = probability.clamp(0.0, 1.0) * 100.0;
        Self {
            risk_percentage,
            risk_tier: RiskTier::from_percentage(risk_percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(RiskTier::from_percentage(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_percentage(32.999), RiskTier::Low);
        assert_eq!(RiskTier::from_percentage(33.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_percentage(65.999), RiskTier::Medium);
        assert_eq!(RiskTier::from_percentage(66.0), RiskTier::High);
        assert_eq!(RiskTier::from_percentage(100.0), RiskTier::High);
    }

    #[test]
    fn probability_is_scaled_to_percent() {
        let r = PredictionResult::from_probability(0.25);
        assert_eq!(r.risk_percentage, 25.0);
        assert_eq!(r.risk_tier, RiskTier::Low);
        assert_eq!(PredictionResult::from_probability(1.0).risk_tier, RiskTier::High);
    }

    #[test]
    fn colours_and_cues() {
        assert_eq!(RiskTier::Low.color(), "green");
        assert_eq!(RiskTier::Medium.color(), "orange");
        assert_eq!(RiskTier::High.color(), "red");
        assert_eq!(RiskTier::Low.cue(), Cue::Success);
        assert_eq!(RiskTier::Medium.cue(), Cue::Warning);
        assert_eq!(RiskTier::High.cue(), Cue::Error);
    }

    #[test]
    fn each_tier_has_three_recommendations() {
        for tier in [RiskTier::Low, RiskTier::Medium, RiskTier::High] {
            assert_eq!(tier.recommendations().len(), 3);
        }
        assert_eq!(
            RiskTier::High.recommendations()[0],
            "Seek immediate medical consultation"
        );
    }
}
