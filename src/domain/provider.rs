use thiserror::Error;

/// Character that switches the search field into provider-selection mode.
pub const COMMAND_PREFIX: char = ':';

/// Provider used for every search that was not preceded by a command.
pub const DEFAULT_PROVIDER_KEY: char = 'b';

/// Placeholder substituted with the encoded query.
pub const QUERY_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider {
    pub name: &'static str,
    pub url_template: &'static str,
    pub icon: &'static str,
}

impl Provider {
    /// Host serving the provider's icon, shown where a browser would draw the icon.
    pub fn icon_host(&self) -> Option<String> {
        url::Url::parse(self.icon)
            .ok()?
            .host_str()
            .map(|host| host.trim_start_matches("www.").to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("provider key '{key}' is registered twice")]
    DuplicateKey { key: char },

    #[error("default provider key '{key}' is not registered")]
    MissingDefault { key: char },

    #[error("template for provider '{key}' must contain exactly one %s, found {found}")]
    BadTemplate { key: char, found: usize },
}

/// Ordered table of search providers keyed by their one-character shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    entries: Vec<(char, Provider)>,
    default_key: char,
}

impl ProviderRegistry {
    pub fn new(entries: Vec<(char, Provider)>, default_key: char) -> Result<Self, RegistryError> {
        for (idx, (key, provider)) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|(other, _)| other == key) {
                return Err(RegistryError::DuplicateKey { key: *key });
            }
            let found = provider.url_template.matches(QUERY_PLACEHOLDER).count();
            if found != 1 {
                return Err(RegistryError::BadTemplate { key: *key, found });
            }
        }
        if !entries.iter().any(|(key, _)| *key == default_key) {
            return Err(RegistryError::MissingDefault { key: default_key });
        }
        Ok(Self {
            entries,
            default_key,
        })
    }

    /// The compiled-in provider table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_PROVIDERS.to_vec(),
            default_key: DEFAULT_PROVIDER_KEY,
        }
    }

    pub fn get(&self, key: char) -> Option<&Provider> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, provider)| provider)
    }

    pub fn contains(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    pub fn default_key(&self) -> char {
        self.default_key
    }

    pub fn default_provider(&self) -> &Provider {
        // `new` and `builtin` both guarantee the default key is present.
        self.get(self.default_key)
            .unwrap_or_else(|| &self.entries[0].1)
    }

    /// Providers in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Provider)> + '_ {
        self.entries.iter().map(|(key, provider)| (*key, provider))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_PROVIDERS: [(char, Provider); 5] = [
    (
        'p',
        Provider {
            name: "Perplexity",
            url_template: "https://www.perplexity.ai/?q=%s",
            icon: "https://www.perplexity.ai/favicon.ico",
        },
    ),
    (
        'd',
        Provider {
            name: "DuckDuckGo",
            url_template: "https://www.duckduckgo.com/?q=%s",
            icon: "https://www.duckduckgo.com/favicon.ico",
        },
    ),
    (
        'b',
        Provider {
            name: "Brave",
            url_template: "https://search.brave.com/search?q=%s",
            icon: "https://brave.com/static-assets/images/brave-logo-sans-text.svg",
        },
    ),
    (
        'g',
        Provider {
            name: "Google",
            url_template: "https://www.google.com/?q=%s",
            icon: "https://www.google.com/favicon.ico",
        },
    ),
    (
        'w',
        Provider {
            name: "Wikipedia",
            url_template: "https://en.wikipedia.org/wiki/Special:Search?search=%s",
            icon: "https://www.wikipedia.org/favicon.ico",
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(template: &'static str) -> Provider {
        Provider {
            name: "Test",
            url_template: template,
            icon: "https://example.com/icon.png",
        }
    }

    #[test]
    fn test_builtin_table_is_valid() {
        let builtin = ProviderRegistry::builtin();
        let rebuilt = ProviderRegistry::new(BUILTIN_PROVIDERS.to_vec(), DEFAULT_PROVIDER_KEY);
        assert_eq!(rebuilt, Ok(builtin));
    }

    #[test]
    fn test_builtin_order_is_definition_order() {
        let registry = ProviderRegistry::builtin();
        let keys: Vec<char> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!['p', 'd', 'b', 'g', 'w']);
        assert_eq!(registry.default_key(), 'b');
        assert_eq!(registry.default_provider().name, "Brave");
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.get('x').is_none());
        assert!(!registry.contains(':'));
        assert_eq!(registry.get('w').map(|p| p.name), Some("Wikipedia"));
    }

    #[test]
    fn test_new_rejects_duplicate_keys() {
        let err = ProviderRegistry::new(
            vec![('a', provider("https://a/?q=%s")), ('a', provider("https://b/?q=%s"))],
            'a',
        );
        assert_eq!(err, Err(RegistryError::DuplicateKey { key: 'a' }));
    }

    #[test]
    fn test_new_rejects_missing_default() {
        let err = ProviderRegistry::new(vec![('a', provider("https://a/?q=%s"))], 'z');
        assert_eq!(err, Err(RegistryError::MissingDefault { key: 'z' }));
    }

    #[test]
    fn test_new_rejects_bad_templates() {
        let none = ProviderRegistry::new(vec![('a', provider("https://a/"))], 'a');
        assert_eq!(none, Err(RegistryError::BadTemplate { key: 'a', found: 0 }));

        let two = ProviderRegistry::new(vec![('a', provider("https://a/%s?q=%s"))], 'a');
        assert_eq!(two, Err(RegistryError::BadTemplate { key: 'a', found: 2 }));
    }

    #[test]
    fn test_icon_host() {
        let registry = ProviderRegistry::builtin();
        assert_eq!(
            registry.get('b').and_then(Provider::icon_host).as_deref(),
            Some("brave.com")
        );
        assert_eq!(
            registry.get('g').and_then(Provider::icon_host).as_deref(),
            Some("google.com")
        );
        assert_eq!(provider("https://a/?q=%s").icon_host().as_deref(), Some("example.com"));
    }
}
