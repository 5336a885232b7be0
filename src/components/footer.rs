use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!(" ERROR: {err} "), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!(" {msg} "), theme.status_info)
        } else {
            Span::styled(" READY ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let hints: &[(&str, &str)] = if state.view.input_focused {
            &[
                ("Enter", "search"),
                (":", "providers"),
                ("Esc", "leave field"),
            ]
        } else {
            &[("Alt+k", "search"), ("q", "quit")]
        };
        for (idx, (key, label)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(format!(" {} ", glyphs::SEP), theme.footer));
            }
            spans.push(Span::styled(format!(" {key} "), theme.key_binding));
            spans.push(Span::styled(format!(" {label}"), theme.footer));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
