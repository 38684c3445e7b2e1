//! Prediction value types and display formatting.

use std::fmt;

/// Confidence strictly above this is high risk.
const HIGH_RISK_ABOVE: f64 = 75.0;
/// Confidence strictly above this (and not high) is moderate risk.
const MODERATE_RISK_ABOVE: f64 = 50.0;

/// Outcome of one prediction call, replaced wholesale by the next.
#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResult {
    /// Predicted label, e.g. "Diabetes" or "Not Diabetes".
    pub label: String,
    /// Disease probability in percent (0-100).
    pub diabetes_probability: f64,
    /// Healthy probability in percent (0-100).
    pub healthy_probability: f64,
    /// Backend certainty in percent (0-100).
    pub confidence: f64,
    /// Number of symptoms the backend analyzed.
    pub symptoms_count: u64,
    /// Human-readable advice from the backend.
    pub message: String,
}

impl PredictionResult {
    pub fn risk_tier(&self) -> RiskTier {
        RiskTier::from_confidence(self.confidence)
    }

    /// Danger when the label names the disease outcome, success otherwise.
    pub fn message_tone(&self, positive_label: &str) -> MessageTone {
        if self.label == positive_label {
            MessageTone::Danger
        } else {
            MessageTone::Success
        }
    }
}

/// Three-level classification derived from confidence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Thresholds are strict: exactly 75 is moderate and exactly 50 is low.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > HIGH_RISK_ABOVE {
            Self::High
        } else if confidence > MODERATE_RISK_ABOVE {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Text shown next to the predicted label.
    pub fn level_text(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// Indicator color as RGB.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),
            Self::Moderate => (251, 191, 36),
            Self::High => (239, 68, 68),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Styling of the result message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Danger,
}

/// Turn `excessive_thirst` into `Excessive Thirst`.
///
/// Each underscore-separated word gets its first character uppercased; the
/// rest of the word is kept as-is. Empty words survive, so `a__b` keeps two
/// spaces.
pub fn symptom_label(id: &str) -> String {
    id.split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Percentage readout with exactly one decimal place. Ties round away from zero.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}%")
}
