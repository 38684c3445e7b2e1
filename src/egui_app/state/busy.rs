use std::time::Instant;

/// UI state for the modal busy overlay.
#[derive(Clone, Debug, Default)]
pub struct BusyOverlayState {
    /// Whether the overlay is visible.
    pub visible: bool,
    /// Title text for the overlay.
    pub title: String,
    /// Optional detail text for the overlay.
    pub detail: Option<String>,
    /// When the overlay was shown.
    pub started_at: Option<Instant>,
}

impl BusyOverlayState {
    /// Create a visible overlay.
    pub fn shown(title: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            visible: true,
            title: title.into(),
            detail,
            started_at: Some(Instant::now()),
        }
    }

    /// Seconds since the overlay appeared, for the elapsed readout.
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.started_at.map(|started| started.elapsed().as_secs())
    }
}
