use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newtab::app::{action::Action, reducer, state::AppState, ui};
use newtab::theme::Theme;
use ratatui::{backend::TestBackend, Terminal};

fn type_str(app_state: &mut AppState, text: &str) {
    for c in text.chars() {
        reducer::update(
            app_state,
            Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())),
        );
    }
}

fn draw_all_sizes(app_state: &mut AppState, theme: &Theme) {
    for width in 0..100 {
        for height in 0..50 {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            let _ = terminal.draw(|f| {
                ui::draw(f, app_state, theme);
            });
        }
    }
}

fn main() {
    let theme = Theme::default();

    // Empty page, unfocused
    let mut app_state = AppState::default();
    draw_all_sizes(&mut app_state, &theme);

    // Suggestion panel open
    reducer::update(&mut app_state, Action::FocusSearch);
    type_str(&mut app_state, ":");
    draw_all_sizes(&mut app_state, &theme);

    // Provider marker plus a long query
    type_str(&mut app_state, "w");
    type_str(
        &mut app_state,
        "a query long enough to overflow the search field on narrow terminals",
    );
    draw_all_sizes(&mut app_state, &theme);

    // Error in the footer
    app_state.last_error = Some("failed to open https://example.com: no browser found on this system, which is a long message".to_string());
    draw_all_sizes(&mut app_state, &theme);

    println!("Layout verification completed successfully!");
}
