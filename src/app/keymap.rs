use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    /// Bindings active whether or not the search field has focus.
    pub global: HashMap<KeyEvent, Action>,
    /// Bindings that take precedence over text entry inside the search field.
    pub search_field: HashMap<KeyEvent, Action>,
    /// Bindings used while the search field is not focused.
    pub page: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn new() -> Self {
        let mut global = HashMap::new();
        let mut search_field = HashMap::new();
        let mut page = HashMap::new();

        // --- Global ---
        global.insert(alt('k'), Action::FocusSearch);
        global.insert(ctrl('c'), Action::Quit);

        // --- Search Field ---
        search_field.insert(key(KeyCode::Enter), Action::Submit);
        search_field.insert(key(KeyCode::Esc), Action::BlurSearch);

        // --- Page ---
        page.insert(char_key('q'), Action::Quit);
        page.insert(key(KeyCode::Esc), Action::Quit);

        Self {
            global,
            search_field,
            page,
        }
    }

    /// Resolves a key press. Unbound keys edit the search field when it has focus.
    pub fn get_action(&self, event: KeyEvent, input_focused: bool) -> Option<Action> {
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        if input_focused {
            return Some(
                self.search_field
                    .get(&event)
                    .cloned()
                    .unwrap_or(Action::TextAreaInput(event)),
            );
        }
        self.page.get(&event).cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn alt(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
