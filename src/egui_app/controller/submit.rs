use super::*;
use crate::backend::BackendError;

pub(crate) const EMPTY_SELECTION: &str = "Please select at least one symptom";
pub(crate) const PREDICTION_FAILED: &str = "Prediction failed. Please try again.";
pub(crate) const REQUEST_FAILED: &str = "An error occurred. Please try again.";

impl EguiController {
    /// Send the current selection to the prediction endpoint.
    ///
    /// An empty selection is refused locally without issuing a request. While a
    /// request is outstanding further submits are ignored.
    pub fn submit_prediction(&mut self) {
        let symptoms = self.selected_symptoms();
        if symptoms.is_empty() {
            self.show_notice(EMPTY_SELECTION);
            return;
        }
        if self.jobs.prediction_in_progress() {
            tracing::debug!("Prediction already in flight; ignoring submit");
            return;
        }
        let count = symptoms.len();
        let Some(request_id) = self.jobs.begin_prediction(self.backend.clone(), symptoms) else {
            return;
        };
        tracing::info!("Requesting prediction {request_id} for {count} symptom(s)");
        self.ui.busy = BusyOverlayState::shown(
            "Analyzing symptoms...",
            Some(format!("{count} symptom(s) selected")),
        );
        self.set_status("Requesting prediction...", StatusTone::Busy);
    }

    pub(super) fn clear_busy(&mut self) {
        self.ui.busy = BusyOverlayState::default();
    }

    pub(super) fn handle_prediction_error(&mut self, err: BackendError) {
        tracing::warn!("Prediction failed: {err}");
        let message = match &err {
            BackendError::Rejected { message } => {
                message.clone().unwrap_or_else(|| PREDICTION_FAILED.to_string())
            }
            BackendError::Transport(_) | BackendError::Body(_) | BackendError::Json(_) => {
                REQUEST_FAILED.to_string()
            }
        };
        self.set_status(format!("Prediction failed: {err}"), StatusTone::Error);
        self.show_notice(message);
    }
}
