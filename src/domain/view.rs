/// One entry of the suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    pub label: String,
    pub shortcut: String,
    pub icon_host: Option<String>,
}

/// The page regions the search bar logic reads and mutates.
#[cfg_attr(test, mockall::automock)]
pub trait SearchView {
    fn input_text(&self) -> String;
    fn clear_input(&mut self);

    /// Returns false when there is no search field to focus.
    fn focus_input(&mut self) -> bool;

    fn push_suggestion(&mut self, row: SuggestionRow);
    fn clear_suggestions(&mut self);
    fn set_suggestions_visible(&mut self, visible: bool);

    /// Places `text` next to the search icon.
    fn insert_provider_marker(&mut self, text: &str);
    /// Returns whether a marker was present.
    fn remove_provider_marker(&mut self) -> bool;
}

/// Opens a destination in place of the current page.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str) -> std::io::Result<()>;
}
