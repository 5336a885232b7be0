use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub provider_name: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(
                format!("{} newtab", glyphs::SEARCH),
                self.theme.brand,
            )),
            Line::from(Span::styled(
                format!("searching with {}", self.provider_name),
                self.theme.brand_tagline,
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
