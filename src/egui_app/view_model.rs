//! Helpers to convert domain data into egui-facing view structs.

use crate::egui_app::state::{ResultView, SymptomToggle};
use crate::prediction::{self, PredictionResult};

/// Build one unchecked toggle per catalog identifier, keeping catalog order.
pub fn symptom_toggles(ids: &[String]) -> Vec<SymptomToggle> {
    ids.iter()
        .map(|id| SymptomToggle {
            id: id.clone(),
            label: prediction::symptom_label(id),
            checked: false,
        })
        .collect()
}

/// Format a prediction for the result panel.
pub fn result_view(result: &PredictionResult, positive_label: &str) -> ResultView {
    let risk_tier = result.risk_tier();
    ResultView {
        label: result.label.clone(),
        risk_tier,
        risk_text: risk_tier.level_text().to_string(),
        diabetes_probability: prediction::format_percent(result.diabetes_probability),
        healthy_probability: prediction::format_percent(result.healthy_probability),
        confidence: prediction::format_percent(result.confidence),
        analyzed: result.symptoms_count.to_string(),
        message: result.message.clone(),
        tone: result.message_tone(positive_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::{MessageTone, RiskTier};

    #[test]
    fn toggles_follow_catalog_order_and_labels() {
        let toggles = symptom_toggles(&["frequent_urination".into(), "fatigue".into()]);
        let labels: Vec<&str> = toggles.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["Frequent Urination", "Fatigue"]);
        assert!(toggles.iter().all(|t| !t.checked));
    }

    #[test]
    fn result_view_formats_readouts() {
        let result = PredictionResult {
            label: "Diabetes".into(),
            diabetes_probability: 82.3,
            healthy_probability: 17.7,
            confidence: 82.3,
            symptoms_count: 2,
            message: "See a doctor".into(),
        };
        let view = result_view(&result, "Diabetes");
        assert_eq!(view.risk_tier, RiskTier::High);
        assert_eq!(view.risk_text, "High Risk");
        assert_eq!(view.diabetes_probability, "82.3%");
        assert_eq!(view.healthy_probability, "17.7%");
        assert_eq!(view.confidence, "82.3%");
        assert_eq!(view.analyzed, "2");
        assert_eq!(view.tone, MessageTone::Danger);
    }
}
