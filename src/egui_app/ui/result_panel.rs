use super::EguiApp;
use super::donut_chart;
use super::style;
use eframe::egui::{self, Align, CornerRadius, Frame, Margin, RichText, Stroke, Ui};

impl EguiApp {
    /// Result area; hidden while no result is set.
    pub(super) fn render_result_panel(&mut self, ui: &mut Ui) {
        let Some(view) = self.controller.ui.result.as_ref() else {
            return;
        };
        let palette = style::palette();
        let risk_color = style::risk_color(view.risk_tier);
        let response = Frame::NONE
            .fill(style::compartment_fill())
            .stroke(style::outer_border())
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new(&view.label).color(palette.text_primary).strong());
                    ui.add_space(12.0);
                    Frame::NONE
                        .fill(risk_color.gamma_multiply(0.25))
                        .stroke(Stroke::new(1.0, risk_color))
                        .corner_radius(CornerRadius::same(4))
                        .inner_margin(Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&view.risk_text).color(risk_color).strong());
                        });
                });
                ui.add_space(8.0);
                egui::Grid::new("result_readouts")
                    .num_columns(2)
                    .spacing(egui::vec2(16.0, 4.0))
                    .show(ui, |ui| {
                        for (name, value) in [
                            ("Diabetes probability", &view.diabetes_probability),
                            ("Healthy probability", &view.healthy_probability),
                            ("Confidence", &view.confidence),
                            ("Symptoms analyzed", &view.analyzed),
                        ] {
                            ui.label(RichText::new(name).color(palette.text_muted));
                            ui.label(RichText::new(value).color(palette.text_primary));
                            ui.end_row();
                        }
                    });
                ui.add_space(8.0);
                Frame::NONE
                    .fill(style::message_fill(view.tone))
                    .stroke(style::message_stroke(view.tone))
                    .inner_margin(Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.label(RichText::new(&view.message).color(palette.text_primary));
                    });
                if let Some(chart) = self.controller.chart() {
                    ui.add_space(12.0);
                    donut_chart::render_donut_chart(ui, chart);
                }
            })
            .response;

        if self.controller.ui.scroll.to_result {
            response.scroll_to_me(Some(Align::TOP));
            self.controller.ui.scroll.to_result = false;
        }
    }
}
