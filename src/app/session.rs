use crate::domain::provider::ProviderRegistry;

/// Per-page search state: which provider the next search uses and whether the
/// suggestion panel is currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    selected: char,
    pub suggestions_shown: bool,
}

impl SessionState {
    pub fn new(registry: &ProviderRegistry) -> Self {
        Self {
            selected: registry.default_key(),
            suggestions_shown: false,
        }
    }

    pub fn selected(&self) -> char {
        self.selected
    }

    /// Switches to `key` if the registry knows it. Unknown keys leave the
    /// selection untouched.
    pub fn select(&mut self, key: char, registry: &ProviderRegistry) -> bool {
        if !registry.contains(key) {
            return false;
        }
        self.selected = key;
        true
    }

    pub fn reset(&mut self, registry: &ProviderRegistry) {
        self.selected = registry.default_key();
    }
}
