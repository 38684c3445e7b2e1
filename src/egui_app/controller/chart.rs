//! Ownership of the single live donut chart.

use egui::Color32;

pub(crate) const DISEASE_SLICE_LABEL: &str = "Diabetes Risk";
pub(crate) const HEALTHY_SLICE_LABEL: &str = "Healthy Probability";
const DISEASE_SLICE_COLOR: Color32 = Color32::from_rgb(239, 68, 68);
const HEALTHY_SLICE_COLOR: Color32 = Color32::from_rgb(16, 185, 129);

/// Identity of one chart instance; a replacement always gets a new id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChartId(u64);

/// One wedge of the donut.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    /// Percentage value as reported by the backend.
    pub value: f64,
    pub color: Color32,
}

/// Two-slice proportion chart built from one prediction.
#[derive(Debug, PartialEq)]
pub struct DonutChart {
    id: ChartId,
    slices: [ChartSlice; 2],
}

impl DonutChart {
    fn new(id: ChartId, disease_percent: f64, healthy_percent: f64) -> Self {
        Self {
            id,
            slices: [
                ChartSlice {
                    label: DISEASE_SLICE_LABEL,
                    value: disease_percent,
                    color: DISEASE_SLICE_COLOR,
                },
                ChartSlice {
                    label: HEALTHY_SLICE_LABEL,
                    value: healthy_percent,
                    color: HEALTHY_SLICE_COLOR,
                },
            ],
        }
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn slices(&self) -> &[ChartSlice] {
        &self.slices
    }

    /// Share of the full turn covered by each slice. Negative values count as zero.
    pub fn fractions(&self) -> Vec<f32> {
        let values: Vec<f64> = self.slices.iter().map(|slice| slice.value.max(0.0)).collect();
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return vec![0.0; values.len()];
        }
        values.iter().map(|value| (value / total) as f32).collect()
    }

    /// Tooltip text for a slice, e.g. `Diabetes Risk: 82.3%`.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.slices
            .get(index)
            .map(|slice| format!("{}: {}%", slice.label, slice.value))
    }
}

/// Holds at most one chart. Replacing drops the old instance before the new one is stored.
#[derive(Debug, Default)]
pub(crate) struct ChartSlot {
    current: Option<DonutChart>,
    next_id: u64,
}

impl ChartSlot {
    pub(crate) fn current(&self) -> Option<&DonutChart> {
        self.current.as_ref()
    }

    pub(crate) fn replace(&mut self, disease_percent: f64, healthy_percent: f64) -> ChartId {
        self.release();
        self.next_id += 1;
        let id = ChartId(self.next_id);
        self.current = Some(DonutChart::new(id, disease_percent, healthy_percent));
        id
    }

    pub(crate) fn release(&mut self) {
        if let Some(old) = self.current.take() {
            tracing::debug!("Destroyed chart {:?}", old.id);
        }
    }
}
