use crate::egui_app::controller::hotkeys;
use crate::egui_app::ui::EguiApp;
use eframe::egui::{self, Event, Key, Modifiers};

/// Fresh, unmodified key presses from this frame's input events.
pub(super) fn pressed_keys(events: &[Event]) -> Vec<Key> {
    events
        .iter()
        .filter_map(|event| match event {
            Event::Key {
                key,
                pressed: true,
                repeat: false,
                modifiers,
                ..
            } if modifiers.is_none() => Some(*key),
            _ => None,
        })
        .collect()
}

impl EguiApp {
    /// Dispatch Enter and Escape to the form. Skipped while a text field has focus.
    pub(super) fn process_hotkeys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let notice_open = self.controller.ui.notice.is_some();
        let keys = ctx.input(|i| pressed_keys(&i.events));
        for key in keys {
            let Some(action) = hotkeys::action_for_key(key, notice_open) else {
                continue;
            };
            ctx.input_mut(|i| i.consume_key(Modifiers::NONE, key));
            self.controller.handle_hotkey(action);
            break;
        }
    }
}
