//! Prediction form controller: owns UI state and bridges the backend to the egui UI.

mod background_jobs;
mod catalog;
mod chart;
pub mod hotkeys;
mod jobs;
mod results;
mod selection;
mod submit;

#[cfg(test)]
mod test_support;

pub use chart::{ChartId, ChartSlice, DonutChart};

use crate::backend::PredictionBackend;
use crate::config::PredictionSettings;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use chart::ChartSlot;
use jobs::ControllerJobs;
use std::sync::Arc;

/// Where the form is in its select → submit → show → reset cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// Nothing selected.
    Idle,
    /// At least one symptom selected.
    Ready,
    /// A prediction request is outstanding.
    Submitting,
    /// A result is on screen.
    ResultShown,
}

/// Maintains app state and bridges the prediction backend to the egui UI.
///
/// One controller exists per session; it is the sole owner of the chart
/// handle and of the toggles that define the current selection.
pub struct EguiController {
    pub ui: UiState,
    backend: Arc<dyn PredictionBackend>,
    settings: PredictionSettings,
    jobs: ControllerJobs,
    chart: ChartSlot,
}

impl EguiController {
    pub fn new(backend: Arc<dyn PredictionBackend>, settings: PredictionSettings) -> Self {
        Self {
            ui: UiState::default(),
            backend,
            settings,
            jobs: ControllerJobs::new(),
            chart: ChartSlot::default(),
        }
    }

    /// Derive the current phase from live state.
    pub fn phase(&self) -> FormPhase {
        if self.jobs.prediction_in_progress() {
            FormPhase::Submitting
        } else if self.ui.result.is_some() {
            FormPhase::ResultShown
        } else if self.selected_count() > 0 {
            FormPhase::Ready
        } else {
            FormPhase::Idle
        }
    }

    /// True while any background request is outstanding.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.catalog_in_progress() || self.jobs.prediction_in_progress()
    }

    /// Close the blocking notification.
    pub fn dismiss_notice(&mut self) {
        self.ui.notice = None;
    }

    fn show_notice(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Showing notice: {message}");
        self.ui.notice = Some(NoticeState::error(message));
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.set(text, tone);
    }
}
