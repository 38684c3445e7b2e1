use eframe::egui::{self, Color32, Id, LayerId, Order};

pub(super) const BACKDROP_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 160);

/// Stacking tiers for things drawn above the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum OverlayLayer {
    /// Busy indicator; sits above panels but below notices.
    Busy,
    /// Blocking notices that must stay on top.
    Modal,
}

impl OverlayLayer {
    pub(super) fn order(self) -> Order {
        match self {
            Self::Busy => Order::Foreground,
            Self::Modal => Order::Tooltip,
        }
    }

    pub(super) fn layer_id(self, id: impl Into<Id>) -> LayerId {
        LayerId::new(self.order(), id.into())
    }
}

/// Dim the viewport and swallow pointer input behind an overlay.
pub(super) fn backdrop(ctx: &egui::Context, layer: OverlayLayer, id: impl Into<Id>) {
    let id = id.into();
    let rect = ctx.viewport_rect();
    let painter = ctx.layer_painter(layer.layer_id(id.with("backdrop_paint")));
    painter.rect_filled(rect, 0.0, BACKDROP_COLOR);
    egui::Area::new(id.with("backdrop_blocker"))
        .order(layer.order())
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.allocate_rect(rect, egui::Sense::click_and_drag());
        });
}
