//! egui renderer for the prediction form.

mod busy_overlay;
mod donut_chart;
mod hotkey_runtime;
mod notice_modal;
mod overlay_layers;
mod result_panel;
pub mod style;
mod symptoms_panel;

use std::sync::Arc;
use std::time::Duration;

use crate::backend::HttpBackend;
use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window that still fits the symptom grid.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 480.0);
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Build the HTTP backend from configuration and start loading the catalog.
    pub fn new(config: AppConfig) -> Result<Self, String> {
        let backend = HttpBackend::new(&config.backend)
            .map_err(|err| format!("Invalid backend configuration: {err}"))?;
        tracing::info!(
            "Using backend {} / {}",
            backend.symptoms_url(),
            backend.predict_url()
        );
        Ok(Self::with_controller(EguiController::new(
            Arc::new(backend),
            config.prediction,
        )))
    }

    /// Wrap an existing controller and kick off the catalog load.
    pub fn with_controller(mut controller: EguiController) -> Self {
        controller.load_catalog();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::NONE
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.heading(RichText::new("Diabetes Risk Predictor").color(palette.text_primary));
                ui.label(
                    RichText::new("Select the symptoms you are experiencing and analyze them.")
                        .color(palette.text_muted),
                );
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    let (badge, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(badge.center(), 7.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(egui::Color32::WHITE));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(egui::Color32::WHITE))
                        .on_hover_text(status.log_text());
                });
            });
    }

    fn render_form(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                Frame::NONE
                    .fill(style::palette().bg_secondary)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                let mut scroll = egui::ScrollArea::vertical()
                    .id_salt("form_scroll")
                    .auto_shrink([false, false]);
                if self.controller.ui.scroll.to_top {
                    scroll = scroll.vertical_scroll_offset(0.0);
                    self.controller.ui.scroll.to_top = false;
                }
                scroll.show(ui, |ui| {
                    self.render_symptoms_panel(ui);
                    ui.add_space(16.0);
                    self.render_result_panel(ui);
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.process_hotkeys(ctx);
        self.render_header(ctx);
        self.render_status(ctx);
        self.render_form(ctx);
        busy_overlay::render_busy_overlay(ctx, &self.controller.ui.busy);
        self.render_notice(ctx);
        if self.controller.has_pending_jobs() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
