use super::{action::Action, command::Command, interpreter, state::AppState, suggestions};
use crate::domain::view::SearchView;
use crossterm::event::{KeyCode, KeyEvent};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Focus ---
        Action::FocusSearch => {
            state.view.focus_input();
        }
        Action::DeferredFocus => {
            focus_deferred(&mut state.view);
        }
        Action::BlurSearch => {
            state.view.input_focused = false;
        }

        // --- Search Field ---
        Action::TextAreaInput(key) => {
            handle_field_key(state, key);
        }
        Action::SelectSuggestion(idx) => {
            interpreter::select_suggestion(
                &mut state.session,
                &mut state.view,
                &state.registry,
                idx,
            );
        }
        Action::Submit => {
            let input = state.view.input_text().trim().to_string();
            return Some(Command::Submit(input));
        }

        // --- Results ---
        // The dispatcher has already reset the selection; drop the stale marker.
        Action::NavigationCompleted(result) => match result {
            Ok(url) => {
                suggestions::clear_selected_provider_name(&mut state.view);
                state.view.clear_input();
                state.last_error = None;
                state.status_message = Some(format!("Opened {url}"));
                if state.config.exit_on_navigate {
                    state.should_quit = true;
                }
            }
            Err(err) => {
                suggestions::clear_selected_provider_name(&mut state.view);
                state.last_error = Some(err);
            }
        },

        Action::Tick | Action::Resize(_, _) => {}
    }
    None
}

fn focus_deferred(view: &mut dyn SearchView) {
    if !view.focus_input() {
        log::debug!("search field unavailable, skipping deferred focus");
    }
}

fn handle_field_key(state: &mut AppState, key: KeyEvent) {
    let before = state.view.input_text();

    if key.code == KeyCode::Backspace && before.is_empty() {
        suggestions::clear_selected_provider_name(&mut state.view);
        return;
    }

    state.view.input.input(key);
    state.view.input.keep_single_line();

    if state.view.input_text() != before {
        state.last_error = None;
        interpreter::handle_input(&mut state.session, &mut state.view, &state.registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view::MockSearchView;
    use crossterm::event::KeyModifiers;

    fn press(state: &mut AppState, code: KeyCode) -> Option<Command> {
        update(
            state,
            Action::TextAreaInput(KeyEvent::new(code, KeyModifiers::empty())),
        )
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_a_command_selects_provider() {
        let mut state = AppState::default();
        update(&mut state, Action::FocusSearch);

        type_str(&mut state, ":");
        assert!(state.view.suggestions_visible);

        type_str(&mut state, "g");
        assert_eq!(state.session.selected(), 'g');
        assert_eq!(state.view.input_text(), "");
        assert_eq!(state.view.provider_marker.as_deref(), Some("Google |"));
        assert!(!state.view.suggestions_visible);
        assert_eq!(state.selected_provider_name(), "Google");
    }

    #[test]
    fn test_backspace_on_empty_field_clears_marker() {
        let mut state = AppState::default();
        type_str(&mut state, ":w");
        assert!(state.view.provider_marker.is_some());

        press(&mut state, KeyCode::Backspace);
        assert!(state.view.provider_marker.is_none());
        // The selection itself survives; only the marker goes away.
        assert_eq!(state.session.selected(), 'w');

        press(&mut state, KeyCode::Backspace);
        assert!(state.view.provider_marker.is_none());
    }

    #[test]
    fn test_backspace_with_text_edits_field() {
        let mut state = AppState::default();
        type_str(&mut state, ":w");
        type_str(&mut state, "ab");

        press(&mut state, KeyCode::Backspace);
        assert_eq!(state.view.input_text(), "a");
        assert_eq!(state.view.provider_marker.as_deref(), Some("Wikipedia |"));
    }

    #[test]
    fn test_submit_trims_field() {
        let mut state = AppState::default();
        type_str(&mut state, "  rust  ");
        assert_eq!(
            update(&mut state, Action::Submit),
            Some(Command::Submit("rust".to_string()))
        );
    }

    #[test]
    fn test_navigation_result_handling() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::NavigationCompleted(Err("failed to open x".to_string())),
        );
        assert_eq!(state.last_error.as_deref(), Some("failed to open x"));
        assert!(!state.should_quit);

        update(
            &mut state,
            Action::NavigationCompleted(Ok("https://example.com".to_string())),
        );
        assert!(state.last_error.is_none());
        assert!(state.should_quit);

        let mut state = AppState::default();
        state.config.exit_on_navigate = false;
        update(
            &mut state,
            Action::NavigationCompleted(Ok("https://example.com".to_string())),
        );
        assert!(!state.should_quit);
        assert_eq!(
            state.status_message.as_deref(),
            Some("Opened https://example.com")
        );
    }

    #[test]
    fn test_focus_actions() {
        let mut state = AppState::default();
        assert!(!state.view.input_focused);
        update(&mut state, Action::DeferredFocus);
        assert!(state.view.input_focused);
        update(&mut state, Action::BlurSearch);
        assert!(!state.view.input_focused);
        update(&mut state, Action::FocusSearch);
        assert!(state.view.input_focused);
    }

    #[test]
    fn test_navigation_clears_stale_marker() {
        let mut state = AppState::default();
        state.config.exit_on_navigate = false;
        type_str(&mut state, ":wrust");
        assert_eq!(state.view.provider_marker.as_deref(), Some("Wikipedia |"));

        // Selection was reset by the dispatcher before the result arrives.
        let registry = state.registry.clone();
        state.session.reset(&registry);
        update(
            &mut state,
            Action::NavigationCompleted(Err("failed to open x".to_string())),
        );
        assert!(state.view.provider_marker.is_none());
        assert_eq!(state.view.input_text(), "rust");

        state.view.clear_input();
        type_str(&mut state, ":grust");
        assert_eq!(state.view.provider_marker.as_deref(), Some("Google |"));
        state.session.reset(&registry);
        update(
            &mut state,
            Action::NavigationCompleted(Ok("https://example.com".to_string())),
        );
        assert!(state.view.provider_marker.is_none());
        assert_eq!(state.view.input_text(), "");
        assert_eq!(state.selected_provider_name(), "Brave");
    }

    #[test]
    fn test_deferred_focus_tolerates_missing_field() {
        let mut view = MockSearchView::new();
        view.expect_focus_input().times(1).returning(|| false);
        focus_deferred(&mut view);

        let mut view = MockSearchView::new();
        view.expect_focus_input().times(1).returning(|| true);
        focus_deferred(&mut view);
    }
}
