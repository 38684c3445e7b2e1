use super::EguiApp;
use super::overlay_layers::{self, OverlayLayer};
use super::style;
use eframe::egui::{self, Align2, RichText};

impl EguiApp {
    /// Render the blocking notice, if any. Closing it in any way dismisses it.
    pub(super) fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.controller.ui.notice.clone() else {
            return;
        };
        overlay_layers::backdrop(ctx, OverlayLayer::Modal, egui::Id::new("notice_modal"));

        let palette = style::palette();
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new(RichText::new(&notice.title).color(palette.danger))
            .id(egui::Id::new("notice_modal_window"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(OverlayLayer::Modal.order())
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(RichText::new(&notice.message).color(palette.text_primary));
                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if !open || dismissed {
            self.controller.dismiss_notice();
        }
    }
}
