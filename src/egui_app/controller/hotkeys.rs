use super::*;
use egui::Key;

/// Keyboard gesture used to trigger an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HotkeyGesture {
    pub key: Key,
}

impl HotkeyGesture {
    pub const fn new(key: Key) -> Self {
        Self { key }
    }
}

/// Form commands reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HotkeyAction {
    Submit,
    Reset,
    DismissNotice,
}

impl HotkeyAction {
    pub fn label(self) -> &'static str {
        match self {
            HotkeyAction::Submit => "Analyze symptoms",
            HotkeyAction::Reset => "Reset form",
            HotkeyAction::DismissNotice => "Dismiss notice",
        }
    }
}

pub const SUBMIT_GESTURE: HotkeyGesture = HotkeyGesture::new(Key::Enter);
pub const RESET_GESTURE: HotkeyGesture = HotkeyGesture::new(Key::Escape);

/// Map a key press to an action. An open notice captures both keys.
pub fn action_for_key(key: Key, notice_open: bool) -> Option<HotkeyAction> {
    if notice_open {
        return match key {
            Key::Enter | Key::Escape => Some(HotkeyAction::DismissNotice),
            _ => None,
        };
    }
    if key == SUBMIT_GESTURE.key {
        Some(HotkeyAction::Submit)
    } else if key == RESET_GESTURE.key {
        Some(HotkeyAction::Reset)
    } else {
        None
    }
}

impl EguiController {
    /// Run a keyboard action against the form.
    ///
    /// Enter with nothing selected is a no-op rather than the empty-selection notice.
    pub fn handle_hotkey(&mut self, action: HotkeyAction) {
        tracing::debug!("Hotkey: {}", action.label());
        match action {
            HotkeyAction::Submit => {
                if self.selected_count() > 0 {
                    self.submit_prediction();
                }
            }
            HotkeyAction::Reset => self.reset_form(),
            HotkeyAction::DismissNotice => self.dismiss_notice(),
        }
    }
}
