#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search Field ---
    FocusSearch,                               // Alt+k from anywhere
    DeferredFocus,                             // One-shot focus after startup
    BlurSearch,                                // Esc inside the field
    TextAreaInput(crossterm::event::KeyEvent), // Edit the field
    Submit,                                    // Enter inside the field
    SelectSuggestion(usize),                   // Click on a suggestion row

    // --- Results ---
    NavigationCompleted(Result<String, String>), // Destination opened, or why not
}
