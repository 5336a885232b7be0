#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve and open the destination for the trimmed field contents.
    Submit(String),
}
