use super::config::Config;
use super::keymap::KeyMap;
use super::session::SessionState;
use super::view::TerminalView;
use crate::domain::provider::ProviderRegistry;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Lifecycle & Status ---
    pub should_quit: bool,
    pub last_error: Option<String>,
    pub status_message: Option<String>, // "Opened https://..."

    // --- Search ---
    pub registry: ProviderRegistry,
    pub session: SessionState,
    pub view: TerminalView,

    // --- Settings ---
    pub config: Config,
    pub keymap: KeyMap,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let registry = ProviderRegistry::builtin();
        let session = SessionState::new(&registry);
        Self {
            should_quit: false,
            last_error: None,
            status_message: None,
            registry,
            session,
            view: TerminalView::default(),
            config,
            keymap: KeyMap::new(),
        }
    }

    /// Name of the provider the next search goes to.
    pub fn selected_provider_name(&self) -> &'static str {
        self.registry
            .get(self.session.selected())
            .unwrap_or_else(|| self.registry.default_provider())
            .name
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
