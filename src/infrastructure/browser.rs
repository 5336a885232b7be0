use crate::domain::view::Navigator;

/// Hands destinations to the desktop browser.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    program: Option<String>,
}

impl SystemBrowser {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }
}

impl Navigator for SystemBrowser {
    fn navigate(&self, url: &str) -> std::io::Result<()> {
        match &self.program {
            Some(program) => open::with_detached(url, program),
            None => open::that_detached(url),
        }
    }
}
