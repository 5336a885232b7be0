use ratatui::style::{Modifier, Style};

pub mod glyphs;
pub mod nord;
pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub brand: Style,
    pub brand_tagline: Style,

    pub search_icon: Style,
    pub provider_marker: Style,

    pub suggestion_label: Style,
    pub suggestion_shortcut: Style,
    pub suggestion_icon: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub key_binding: Style,
    pub footer: Style,
    pub page: Style,
}

impl Theme {
    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            brand: Style::default().fg(p.teal).add_modifier(Modifier::BOLD),
            brand_tagline: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            search_icon: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            provider_marker: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),

            suggestion_label: Style::default().fg(p.text),
            suggestion_shortcut: Style::default()
                .bg(p.surface0)
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD),
            suggestion_icon: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            key_binding: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext0),
            page: Style::default().bg(p.base).fg(p.text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&nord::NORD)
    }
}
