use super::*;
use crate::backend::{BackendError, Catalog};
use crate::egui_app::view_model;

const CATALOG_LOAD_FAILED: &str = "Failed to load symptoms. Please restart the app.";

impl EguiController {
    /// Request the symptom catalog. Only the first call per session has an effect.
    pub fn load_catalog(&mut self) {
        if self.ui.symptoms.catalog != CatalogStatus::NotRequested {
            return;
        }
        self.ui.symptoms.catalog = CatalogStatus::Loading;
        self.set_status("Loading symptoms...", StatusTone::Busy);
        self.jobs.begin_catalog_load(self.backend.clone());
    }

    pub(super) fn apply_catalog(&mut self, catalog: Catalog) {
        self.ui.symptoms.catalog = CatalogStatus::Loaded;
        match catalog {
            Catalog::Symptoms(ids) => {
                tracing::info!("Loaded {} symptoms", ids.len());
                self.ui.symptoms.toggles = view_model::symptom_toggles(&ids);
                self.set_status(format!("{} symptoms loaded", ids.len()), StatusTone::Info);
            }
            Catalog::Missing => {
                tracing::warn!("Symptom catalog response had no symptoms field");
                self.ui.symptoms.toggles.clear();
                self.set_status("Backend returned no symptoms", StatusTone::Warning);
            }
        }
    }

    pub(super) fn handle_catalog_error(&mut self, err: BackendError) {
        tracing::warn!("Failed to load symptoms: {err}");
        self.ui.symptoms.toggles.clear();
        self.ui.symptoms.catalog = CatalogStatus::Failed(err.to_string());
        self.set_status(format!("Failed to load symptoms: {err}"), StatusTone::Error);
        self.show_notice(CATALOG_LOAD_FAILED);
    }
}
