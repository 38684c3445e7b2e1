use super::EguiApp;
use super::style;
use crate::egui_app::state::CatalogStatus;
use eframe::egui::{self, RichText, Ui};

const GRID_COLUMNS: usize = 3;

impl EguiApp {
    pub(super) fn render_symptoms_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Select your symptoms").color(palette.text_primary));
        ui.add_space(6.0);

        match &self.controller.ui.symptoms.catalog {
            CatalogStatus::NotRequested | CatalogStatus::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading symptoms...").color(palette.text_muted));
                });
                return;
            }
            CatalogStatus::Failed(_) => {
                ui.label(
                    RichText::new("Symptoms are unavailable. Please restart the app.")
                        .color(palette.danger),
                );
                return;
            }
            CatalogStatus::Loaded => {}
        }

        if self.controller.ui.symptoms.toggles.is_empty() {
            ui.label(RichText::new("No symptoms available.").color(palette.text_muted));
        } else {
            let mut changes = Vec::new();
            egui::Grid::new("symptom_grid")
                .num_columns(GRID_COLUMNS)
                .spacing(egui::vec2(24.0, 8.0))
                .show(ui, |ui| {
                    for (index, toggle) in self.controller.ui.symptoms.toggles.iter().enumerate() {
                        let mut checked = toggle.checked;
                        if ui.checkbox(&mut checked, &toggle.label).changed() {
                            changes.push((toggle.id.clone(), checked));
                        }
                        if (index + 1) % GRID_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });
            for (id, checked) in changes {
                self.controller.set_symptom_checked(&id, checked);
            }
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            let count = self.controller.selected_count();
            ui.label(RichText::new(format!("{count} selected")).color(palette.text_muted));
            ui.add_space(12.0);
            let analyze = egui::Button::new(RichText::new("Analyze Symptoms").strong());
            if ui
                .add_enabled(self.controller.can_submit(), analyze)
                .on_hover_text("Enter")
                .clicked()
            {
                self.controller.submit_prediction();
            }
            if ui.button("Reset").on_hover_text("Esc").clicked() {
                self.controller.reset_form();
            }
        });
    }
}
