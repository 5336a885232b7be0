use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::search_bar::SearchBar;
use crate::components::suggestions::SuggestionPanel;
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};

const COLUMN_WIDTH: u16 = 72;

pub struct PageLayout {
    pub header: Rect,
    pub search: Rect,
    pub suggestions: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, suggestion_count: usize) -> PageLayout {
    let panel_height = if suggestion_count == 0 {
        0
    } else {
        suggestion_count as u16 + 2
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),              // Top spacer
            Constraint::Length(3),            // Brand
            Constraint::Length(3),            // Search bar
            Constraint::Length(panel_height), // Suggestions
            Constraint::Fill(2),              // Bottom spacer
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    let column = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(COLUMN_WIDTH.min(row.width)),
                Constraint::Fill(1),
            ])
            .split(row)[1]
    };

    PageLayout {
        header: column(rows[1]),
        search: column(rows[2]),
        suggestions: column(rows[3]),
        footer: rows[5],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState, theme: &Theme) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    f.render_widget(Block::default().style(theme.page), f.area());

    let shown_rows = if app_state.view.suggestions_visible {
        app_state.view.suggestions.len()
    } else {
        0
    };
    let layout = get_layout(f.area(), shown_rows);

    // --- Brand ---
    f.render_widget(
        Header {
            provider_name: app_state.selected_provider_name(),
            theme,
        },
        layout.header,
    );

    // --- Search Bar ---
    let cursor_style = if app_state.view.input_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    app_state.view.input.set_cursor_style(cursor_style);
    f.render_widget(
        SearchBar {
            view: &app_state.view,
            theme,
        },
        layout.search,
    );

    // --- Suggestions ---
    if shown_rows > 0 {
        f.render_widget(
            SuggestionPanel {
                rows: &app_state.view.suggestions,
                theme,
            },
            layout.suggestions,
        );
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme,
        },
        layout.footer,
    );
}
