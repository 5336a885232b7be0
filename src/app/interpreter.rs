use super::session::SessionState;
use super::suggestions;
use crate::domain::command::{classify, Classification};
use crate::domain::provider::ProviderRegistry;
use crate::domain::view::SearchView;

/// Reacts to an edit of the search field and returns how its text was read.
pub fn handle_input(
    session: &mut SessionState,
    view: &mut dyn SearchView,
    registry: &ProviderRegistry,
) -> Classification {
    let classification = classify(&view.input_text(), registry);

    match &classification {
        Classification::TriggerCommands => {
            suggestions::show(session, view, registry);
        }
        Classification::SelectProvider(key) => {
            suggestions::clear(session, view);
            select_provider(session, view, registry, *key);
        }
        Classification::Empty
        | Classification::InvalidCommand
        | Classification::PlainQuery(_) => {
            suggestions::clear(session, view);
        }
    }

    classification
}

/// Selects the provider listed at `index` in the suggestion panel.
pub fn select_suggestion(
    session: &mut SessionState,
    view: &mut dyn SearchView,
    registry: &ProviderRegistry,
    index: usize,
) -> bool {
    if !session.suggestions_shown {
        return false;
    }
    let Some((key, _)) = registry.iter().nth(index) else {
        return false;
    };
    suggestions::clear(session, view);
    select_provider(session, view, registry, key)
}

fn select_provider(
    session: &mut SessionState,
    view: &mut dyn SearchView,
    registry: &ProviderRegistry,
    key: char,
) -> bool {
    let Some(provider) = registry.get(key) else {
        return false;
    };
    if !session.select(key, registry) {
        return false;
    }
    log::debug!("selected provider {} ({key})", provider.name);
    suggestions::show_selected_provider_name(view, provider.name);
    view.clear_input();
    true
}
