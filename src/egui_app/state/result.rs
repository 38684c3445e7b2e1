use crate::prediction::{MessageTone, RiskTier};

/// Display strings for a prediction result, ready for the result panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    /// Predicted label, shown as the headline.
    pub label: String,
    pub risk_tier: RiskTier,
    /// "High Risk", "Moderate Risk" or "Low Risk".
    pub risk_text: String,
    /// Disease probability readout, e.g. `82.3%`.
    pub diabetes_probability: String,
    /// Healthy probability readout.
    pub healthy_probability: String,
    /// Confidence readout.
    pub confidence: String,
    /// Number of symptoms the backend analyzed.
    pub analyzed: String,
    pub message: String,
    pub tone: MessageTone,
}
