use super::*;
use crate::egui_app::view_model;
use crate::prediction::PredictionResult;

impl EguiController {
    /// Current chart, if a result is on screen.
    pub fn chart(&self) -> Option<&DonutChart> {
        self.chart.current()
    }

    pub(super) fn apply_prediction(&mut self, result: PredictionResult) {
        let view = view_model::result_view(&result, &self.settings.positive_label);
        tracing::info!(
            "Prediction: {} (confidence {}, {} risk)",
            result.label,
            view.confidence,
            view.risk_tier
        );
        self.set_status(
            format!("Prediction: {} ({})", view.label, view.risk_text),
            StatusTone::Info,
        );
        let chart_id = self
            .chart
            .replace(result.diabetes_probability, result.healthy_probability);
        tracing::debug!("Rendered chart {chart_id:?}");
        self.ui.result = Some(view);
        self.ui.scroll.to_result = true;
    }

    /// Clear every toggle, hide the result, release the chart and scroll to the top.
    ///
    /// An outstanding prediction is abandoned; its response is discarded when it arrives.
    pub fn reset_form(&mut self) {
        self.ui.symptoms.clear_checks();
        self.ui.result = None;
        self.chart.release();
        if self.jobs.prediction_in_progress() {
            tracing::info!("Reset while a prediction was outstanding; abandoning it");
            self.jobs.clear_prediction();
            self.clear_busy();
        }
        self.ui.scroll = ScrollRequest {
            to_result: false,
            to_top: true,
        };
        self.set_status("Form reset", StatusTone::Idle);
    }
}
