pub const SEARCH: &str = "⌕";
pub const SEP: &str = "│";
