use crate::app::view::TerminalView;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Search icon, provider marker and the text field, left to right.
pub struct SearchBar<'a> {
    pub view: &'a TerminalView,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border = if self.view.input_focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let icon = format!(" {} ", glyphs::SEARCH);
        let marker = self
            .view
            .provider_marker
            .as_ref()
            .map(|m| format!("{m} "))
            .unwrap_or_default();

        let [icon_area, marker_area, field_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(icon.chars().count() as u16),
                Constraint::Length(marker.chars().count() as u16),
                Constraint::Min(1),
            ])
            .areas(inner);

        Paragraph::new(Line::from(Span::styled(icon, self.theme.search_icon)))
            .render(icon_area, buf);
        if !marker.is_empty() {
            Paragraph::new(Line::from(Span::styled(marker, self.theme.provider_marker)))
                .render(marker_area, buf);
        }
        if field_area.width > 0 {
            Widget::render(&self.view.input, field_area, buf);
        }
    }
}
