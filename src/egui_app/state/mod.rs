//! Shared state types for the egui UI.

mod busy;
mod notice;
mod result;
mod status;
mod symptoms;

pub use busy::*;
pub use notice::*;
pub use result::*;
pub use status::*;
pub use symptoms::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Catalog load status and one toggle per symptom.
    pub symptoms: SymptomGridState,
    /// Modal indicator shown while a prediction is outstanding.
    pub busy: BusyOverlayState,
    /// Rendered result; `None` keeps the result area hidden.
    pub result: Option<ResultView>,
    /// Blocking notification the user must dismiss.
    pub notice: Option<NoticeState>,
    /// One-shot scroll requests consumed by the renderer.
    pub scroll: ScrollRequest,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            symptoms: SymptomGridState::default(),
            busy: BusyOverlayState::default(),
            result: None,
            notice: None,
            scroll: ScrollRequest::default(),
        }
    }
}

/// Viewport moves requested by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollRequest {
    pub to_result: bool,
    pub to_top: bool,
}
