//! Keyboard bindings for grid focus.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings. Only consulted while the grid has
/// focus; the query box consumes printable keys itself.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Vim-style and arrow scrolling
        keys.bind(KeyCode::Char('j'), none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, none, KeyAction::ScrollDown);
        keys.bind(KeyCode::Up, none, KeyAction::ScrollUp);

        // Page navigation
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, none, KeyAction::PageDown);
        keys.bind(KeyCode::PageUp, none, KeyAction::PageUp);

        // Jumps
        keys.bind(KeyCode::Char('g'), none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Char('G'), none, KeyAction::ScrollToBottom);
        keys.bind(KeyCode::Home, none, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, none, KeyAction::ScrollToBottom);

        // Query
        keys.bind(KeyCode::Char('/'), none, KeyAction::FocusQuery);
        keys.bind(KeyCode::Tab, none, KeyAction::FocusQuery);
        for (index, digit) in ('1'..='9').enumerate() {
            keys.bind(KeyCode::Char(digit), none, KeyAction::QuickQuery(index));
        }

        // Application
        keys.bind(KeyCode::Char('r'), none, KeyAction::Retry);
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('?'), KeyModifiers::SHIFT, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vim_and_arrow_keys_scroll() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get(key(KeyCode::Char('j'))), Some(KeyAction::ScrollDown));
        assert_eq!(keys.get(key(KeyCode::Up)), Some(KeyAction::ScrollUp));
        assert_eq!(
            keys.get(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(KeyAction::PageDown)
        );
    }

    #[test]
    fn shifted_g_jumps_to_bottom() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::ScrollToBottom)
        );
        assert_eq!(keys.get(key(KeyCode::Char('g'))), Some(KeyAction::ScrollToTop));
    }

    #[test]
    fn digits_select_quick_chips() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get(key(KeyCode::Char('1'))), Some(KeyAction::QuickQuery(0)));
        assert_eq!(keys.get(key(KeyCode::Char('9'))), Some(KeyAction::QuickQuery(8)));
        assert_eq!(keys.get(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn quit_and_retry_bound() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(
            keys.get(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(keys.get(key(KeyCode::Char('r'))), Some(KeyAction::Retry));
    }
}
