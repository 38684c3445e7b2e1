//! Donut chart painter with legend and hover tooltips.

use super::style;
use crate::egui_app::controller::DonutChart;
use eframe::egui::{self, Color32, Mesh, Pos2, RichText, Sense, Shape, Ui, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

const CHART_SIZE: f32 = 180.0;
/// Hole radius as a share of the outer radius.
const HOLE_RATIO: f32 = 0.6;
const MIN_ARC_STEPS: usize = 2;
const STEPS_PER_TURN: f32 = 96.0;

/// Start and end angle of each slice in radians, clockwise from twelve o'clock.
pub(super) fn slice_angles(fractions: &[f32]) -> Vec<(f32, f32)> {
    let mut start = -FRAC_PI_2;
    fractions
        .iter()
        .map(|fraction| {
            let end = start + fraction.clamp(0.0, 1.0) * TAU;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}

/// Index of the slice under `pos`, if it falls inside the ring.
pub(super) fn slice_at(
    center: Pos2,
    inner_radius: f32,
    outer_radius: f32,
    angles: &[(f32, f32)],
    pos: Pos2,
) -> Option<usize> {
    let offset = pos - center;
    let distance = offset.length();
    if distance < inner_radius || distance > outer_radius {
        return None;
    }
    let mut angle = offset.y.atan2(offset.x);
    if angle < -FRAC_PI_2 {
        angle += TAU;
    }
    angles
        .iter()
        .position(|(start, end)| end > start && angle >= *start && angle < *end)
}

fn ring_segment(
    mesh: &mut Mesh,
    center: Pos2,
    inner_radius: f32,
    outer_radius: f32,
    (start, end): (f32, f32),
    color: Color32,
) {
    let sweep = end - start;
    if sweep <= 0.0 {
        return;
    }
    let steps = ((sweep / TAU) * STEPS_PER_TURN).ceil().max(MIN_ARC_STEPS as f32) as usize;
    let base = mesh.vertices.len() as u32;
    for step in 0..=steps {
        let angle = start + sweep * step as f32 / steps as f32;
        let direction = Vec2::angled(angle);
        mesh.colored_vertex(center + direction * outer_radius, color);
        mesh.colored_vertex(center + direction * inner_radius, color);
    }
    for step in 0..steps as u32 {
        let outer = base + step * 2;
        let inner = outer + 1;
        mesh.add_triangle(outer, inner, outer + 2);
        mesh.add_triangle(inner, inner + 2, outer + 2);
    }
}

/// Paint the chart and its legend. Hovering a slice shows `label: value%`.
pub(super) fn render_donut_chart(ui: &mut Ui, chart: &DonutChart) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(CHART_SIZE), Sense::hover());
        let center = rect.center();
        let outer_radius = CHART_SIZE * 0.5 - 4.0;
        let inner_radius = outer_radius * HOLE_RATIO;
        let angles = slice_angles(&chart.fractions());

        let mut mesh = Mesh::default();
        for (slice, span) in chart.slices().iter().zip(angles.iter()) {
            ring_segment(&mut mesh, center, inner_radius, outer_radius, *span, slice.color);
        }
        ui.painter().add(Shape::mesh(mesh));

        let hovered = response
            .hover_pos()
            .and_then(|pos| slice_at(center, inner_radius, outer_radius, &angles, pos));
        if let Some(text) = hovered.and_then(|index| chart.tooltip(index)) {
            response.on_hover_text_at_pointer(text);
        }

        ui.add_space(16.0);
        ui.vertical(|ui| {
            for slice in chart.slices() {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, slice.color);
                    ui.label(RichText::new(slice.label).color(palette.text_primary));
                });
            }
        });
    });
}
