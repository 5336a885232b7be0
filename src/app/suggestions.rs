use super::session::SessionState;
use crate::domain::provider::{ProviderRegistry, COMMAND_PREFIX};
use crate::domain::view::{SearchView, SuggestionRow};

/// Separator drawn after the selected provider's name.
pub const MARKER_SEPARATOR: &str = " |";

pub fn suggestion_rows(registry: &ProviderRegistry) -> Vec<SuggestionRow> {
    registry
        .iter()
        .map(|(key, provider)| SuggestionRow {
            label: format!("Search w/ {}", provider.name),
            shortcut: format!("{COMMAND_PREFIX}{key}"),
            icon_host: provider.icon_host(),
        })
        .collect()
}

/// Fills and reveals the suggestion panel. Does nothing while it is already shown.
pub fn show(session: &mut SessionState, view: &mut dyn SearchView, registry: &ProviderRegistry) {
    if session.suggestions_shown {
        return;
    }

    let rows = suggestion_rows(registry);
    if rows.is_empty() {
        return;
    }

    view.clear_suggestions();
    for row in rows {
        view.push_suggestion(row);
    }
    view.set_suggestions_visible(true);
    session.suggestions_shown = true;
}

pub fn clear(session: &mut SessionState, view: &mut dyn SearchView) {
    view.clear_suggestions();
    view.set_suggestions_visible(false);
    session.suggestions_shown = false;
}

pub fn show_selected_provider_name(view: &mut dyn SearchView, name: &str) {
    view.remove_provider_marker();
    view.insert_provider_marker(&format!("{name}{MARKER_SEPARATOR}"));
}

pub fn clear_selected_provider_name(view: &mut dyn SearchView) {
    view.remove_provider_marker();
}
