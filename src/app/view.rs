use crate::domain::view::{SearchView, SuggestionRow};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Search or type a URL  (: for providers)";

/// Single-line text area backing the search field.
pub struct SearchField(pub TextArea<'static>);

impl SearchField {
    pub fn new() -> Self {
        let mut area = TextArea::default();
        area.set_placeholder_text(PLACEHOLDER);
        area.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
        area.set_cursor_line_style(Style::default());
        Self(area)
    }

    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    /// Folds line breaks inserted by the text area (Enter variants, Ctrl+m)
    /// back into a single line.
    pub fn keep_single_line(&mut self) {
        if self.0.lines().len() > 1 {
            let text = self.text();
            *self = Self::new();
            self.0.insert_str(text);
        }
    }
}

impl Default for SearchField {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SearchField {
    fn clone(&self) -> Self {
        let mut field = Self::new();
        field.0.insert_str(self.text());
        let (row, col) = self.0.cursor();
        field.0.move_cursor(CursorMove::Jump(row as u16, col as u16));
        field
    }
}

impl std::fmt::Debug for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchField")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchField {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl Deref for SearchField {
    type Target = TextArea<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SearchField {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &SearchField {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// Terminal rendition of the new-tab page regions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalView {
    pub input: SearchField,
    pub input_focused: bool,
    pub suggestions: Vec<SuggestionRow>,
    pub suggestions_visible: bool,
    pub provider_marker: Option<String>,
}

impl SearchView for TerminalView {
    fn input_text(&self) -> String {
        self.input.text()
    }

    fn clear_input(&mut self) {
        self.input = SearchField::new();
    }

    // The field is part of the page for its whole lifetime.
    fn focus_input(&mut self) -> bool {
        self.input_focused = true;
        true
    }

    fn push_suggestion(&mut self, row: SuggestionRow) {
        self.suggestions.push(row);
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
    }

    fn set_suggestions_visible(&mut self, visible: bool) {
        self.suggestions_visible = visible;
    }

    fn insert_provider_marker(&mut self, text: &str) {
        self.provider_marker = Some(text.to_string());
    }

    fn remove_provider_marker(&mut self) -> bool {
        self.provider_marker.take().is_some()
    }
}
