use super::session::SessionState;
use crate::domain::destination;
use crate::domain::provider::ProviderRegistry;
use crate::domain::view::Navigator;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no search provider registered for key '{key}'")]
    UnknownProvider { key: char },

    #[error("failed to open {url}")]
    Navigation {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Navigates to `input` (when it looks like a URL) or to the selected
/// provider's search page for it, then falls back to the default provider.
pub fn submit(
    session: &mut SessionState,
    registry: &ProviderRegistry,
    navigator: &dyn Navigator,
    input: &str,
) -> Result<String, DispatchError> {
    let key = session.selected();
    let Some(provider) = registry.get(key) else {
        log::error!("selected provider key '{key}' is not registered");
        return Err(DispatchError::UnknownProvider { key });
    };

    let url = destination::resolve(provider, input);
    log::info!("navigating to {url}");
    let launched = navigator.navigate(&url);
    session.reset(registry);

    match launched {
        Ok(()) => Ok(url),
        Err(source) => {
            log::error!("failed to open {url}: {source}");
            Err(DispatchError::Navigation { url, source })
        }
    }
}
