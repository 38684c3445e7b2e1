use super::*;

impl EguiController {
    /// Identifiers of the checked symptoms, recomputed from the toggles on every call.
    pub fn selected_symptoms(&self) -> Vec<String> {
        self.ui.symptoms.selected_ids()
    }

    /// Count shown next to the grid.
    pub fn selected_count(&self) -> usize {
        self.ui.symptoms.selected_count()
    }

    /// Submit is offered only with a non-empty selection and no request outstanding.
    pub fn can_submit(&self) -> bool {
        self.selected_count() > 0 && !self.jobs.prediction_in_progress()
    }

    /// Check or uncheck a symptom by identifier. Unknown identifiers are ignored.
    pub fn set_symptom_checked(&mut self, id: &str, checked: bool) {
        let Some(toggle) = self
            .ui
            .symptoms
            .toggles
            .iter_mut()
            .find(|toggle| toggle.id == id)
        else {
            tracing::debug!("Ignoring toggle for unknown symptom {id}");
            return;
        };
        toggle.checked = checked;
        tracing::debug!(
            "Selection now has {} symptom(s)",
            self.ui.symptoms.selected_count()
        );
    }

    /// Flip a symptom's checked state.
    pub fn toggle_symptom(&mut self, id: &str) {
        let checked = self
            .ui
            .symptoms
            .toggles
            .iter()
            .find(|toggle| toggle.id == id)
            .map(|toggle| toggle.checked);
        if let Some(checked) = checked {
            self.set_symptom_checked(id, !checked);
        }
    }
}
