use super::overlay_layers::{self, OverlayLayer};
use super::style;
use crate::egui_app::state::BusyOverlayState;
use eframe::egui::{self, Align2, Area, Frame, Id, RichText, Spinner, Stroke};

/// Render the modal busy indicator while a prediction is outstanding.
pub(super) fn render_busy_overlay(ctx: &egui::Context, busy: &BusyOverlayState) {
    if !busy.visible {
        return;
    }
    overlay_layers::backdrop(ctx, OverlayLayer::Busy, Id::new("busy_overlay"));
    let palette = style::palette();
    let title = if busy.title.is_empty() {
        "Working..."
    } else {
        busy.title.as_str()
    };
    Area::new(Id::new("busy_overlay_panel"))
        .order(OverlayLayer::Busy.order())
        .constrain(true)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let frame = Frame::window(&ctx.style())
                .fill(style::compartment_fill())
                .stroke(Stroke::new(1.0, palette.panel_outline));
            frame.show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(Spinner::new().size(28.0).color(palette.accent_ice));
                    ui.add_space(8.0);
                    ui.heading(RichText::new(title).color(palette.text_primary));
                    if let Some(detail) = busy.detail.as_deref() {
                        ui.add_space(4.0);
                        ui.label(RichText::new(detail).color(palette.text_muted));
                    }
                    if let Some(secs) = busy.elapsed_secs().filter(|secs| *secs > 0) {
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("{secs}s")).color(palette.text_muted));
                    }
                });
            });
        });
}
