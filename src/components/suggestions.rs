use crate::domain::view::SuggestionRow;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SuggestionPanel<'a> {
    pub rows: &'a [SuggestionRow],
    pub theme: &'a Theme,
}

impl Widget for SuggestionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, y) in self.rows.iter().zip(inner.top()..inner.bottom()) {
            let shortcut = format!(" {} ", row.shortcut);
            let icon = row
                .icon_host
                .as_ref()
                .map(|host| format!("  {host}"))
                .unwrap_or_default();
            // Label on the left, shortcut pinned to the right edge.
            let used = (row.label.chars().count() + icon.chars().count() + shortcut.len() + 1) as u16;
            let gap = inner.width.saturating_sub(used) as usize;

            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(row.label.as_str(), self.theme.suggestion_label),
                Span::styled(icon, self.theme.suggestion_icon),
                Span::raw(" ".repeat(gap)),
                Span::styled(shortcut, self.theme.suggestion_shortcut),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
