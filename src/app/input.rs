use crate::app::{action::Action, state::AppState, ui};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

/// Index of the suggestion row under the given terminal cell, if any.
pub fn resolve_clicked_suggestion(
    app_state: &AppState,
    terminal_size: Size,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !app_state.view.suggestions_visible {
        return None;
    }
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state.view.suggestions.len());
    let panel = layout.suggestions;

    // Rows start inside the top border.
    if column <= panel.x
        || column >= panel.x + panel.width.saturating_sub(1)
        || row <= panel.y
        || row >= panel.y + panel.height.saturating_sub(1)
    {
        return None;
    }
    let idx = (row - (panel.y + 1)) as usize;
    (idx < app_state.view.suggestions.len()).then_some(idx)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            app_state
                .keymap
                .get_action(key, app_state.view.input_focused)
        }
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                resolve_clicked_suggestion(app_state, terminal_size, mouse.column, mouse.row)
                    .map(Action::SelectSuggestion)
                    .or_else(|| {
                        let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                        let search = ui::get_layout(area, app_state.view.suggestions.len()).search;
                        search
                            .contains(ratatui::layout::Position::new(mouse.column, mouse.row))
                            .then_some(Action::FocusSearch)
                    })
            }
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    const SIZE: Size = Size {
        width: 100,
        height: 40,
    };

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = AppState::default();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(key), &state, SIZE), None);
    }

    #[test]
    fn test_click_on_suggestion_row_selects_it() {
        let mut state = AppState::default();
        reducer::update(
            &mut state,
            Action::TextAreaInput(KeyEvent::new(KeyCode::Char(':'), KeyModifiers::empty())),
        );
        assert!(state.view.suggestions_visible);

        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let panel = ui::get_layout(area, state.view.suggestions.len()).suggestions;
        let third_row = click(panel.x + 2, panel.y + 3);

        assert_eq!(
            map_event_to_action(third_row, &state, SIZE),
            Some(Action::SelectSuggestion(2))
        );
        // The border itself is not a row.
        assert_eq!(
            map_event_to_action(click(panel.x + 2, panel.y), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_click_on_search_bar_focuses() {
        let state = AppState::default();
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let search = ui::get_layout(area, 0).search;
        assert_eq!(
            map_event_to_action(click(search.x + 1, search.y + 1), &state, SIZE),
            Some(Action::FocusSearch)
        );
    }
}
